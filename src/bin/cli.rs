use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;

use watchworthy_rec_engine::engine::DEFAULT_K;
use watchworthy_rec_engine::providers::TmdbProvider;
use watchworthy_rec_engine::{BuildOptions, ModelBuilder, RecEngine};

#[derive(Parser)]
#[command(name = "rec-engine")]
#[command(about = "WatchWorthy recommendation engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Model artifact directory
    #[arg(short, long, default_value = "model")]
    model_dir: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the TMDB catalog and build the model artifacts
    Build {
        /// TMDB API key (falls back to the TMDB_API_KEY environment variable)
        #[arg(long, env = "TMDB_API_KEY")]
        api_key: String,

        /// Popular-listing pages to fetch
        #[arg(short, long, default_value = "150")]
        pages: u32,

        /// Vocabulary cap
        #[arg(long, default_value = "5000")]
        max_features: usize,

        /// Delay between TMDB requests, in milliseconds
        #[arg(long, default_value = "100")]
        request_delay_ms: u64,
    },

    /// Recommend movies similar to a title
    Recommend {
        /// Exact movie title
        title: String,

        /// Number of recommendations
        #[arg(short, long, default_value_t = DEFAULT_K)]
        count: usize,
    },

    /// Recommend movies for a watchlist (most recently added title first)
    Watchlist {
        /// Watchlist titles, in priority order
        #[arg(required = true)]
        titles: Vec<String>,

        /// Number of recommendations
        #[arg(short, long, default_value_t = DEFAULT_K)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            api_key,
            pages,
            max_features,
            request_delay_ms,
        } => {
            println!("🎬 Building model from {} popular pages...", pages);

            let provider = Arc::new(TmdbProvider::new(api_key));
            let builder = ModelBuilder::new(provider).with_options(BuildOptions {
                pages,
                max_features,
                request_delay: Duration::from_millis(request_delay_ms),
            });

            let engine = builder.build_and_save(&cli.model_dir).await?;

            println!("✅ Model built: {} movies", engine.len());
            println!("   Artifacts written to {}", cli.model_dir);
        }

        Commands::Recommend { title, count } => {
            let engine = RecEngine::load(&cli.model_dir)?;
            let recommendations = engine.recommend_by_title(&title, count)?;

            println!("🎯 Similar to {}:", title);
            for (i, rec) in recommendations.iter().enumerate() {
                println!("   {}. {} (id {})", i + 1, rec.title, rec.id);
            }
        }

        Commands::Watchlist { titles, count } => {
            let engine = RecEngine::load(&cli.model_dir)?;
            let response = engine.recommend_for_watchlist(&titles, count)?;

            println!("🎯 Based on {}:", response.source_title);
            for (i, rec) in response.recommendations.iter().enumerate() {
                println!("   {}. {} (id {})", i + 1, rec.title, rec.id);
            }
        }
    }

    Ok(())
}

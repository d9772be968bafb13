pub mod movie;
pub mod recommendation;

pub use movie::{CrewMember, MovieListing, MovieRecord, RawMovie};
pub use recommendation::{Recommendation, RecommendResponse};

pub mod config;
pub mod errors;
pub mod matching;
pub mod routes;
pub mod state;

pub use matching::{match_resume, MatchError, MatchResult};
pub use routes::build_router;

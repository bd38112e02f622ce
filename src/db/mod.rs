pub mod commentary_queries;
pub mod match_queries;

pub use commentary_queries::CommentaryQueries;
pub use match_queries::MatchQueries;

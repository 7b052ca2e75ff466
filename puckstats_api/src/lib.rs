mod client;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    CayenneExp, DraftQuery, GameType, Operand, Query, SkaterSummaryQuery, SortDirection, SortKey,
    TeamSummaryQuery, DRAFT_COLUMNS, MIN_GAMES_PLAYED, PLAYER_ROW_LIMIT,
};

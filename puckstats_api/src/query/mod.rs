mod common;
pub use self::common::{CayenneExp, GameType, Operand, Query, SortDirection, SortKey};

mod skater;
pub use self::skater::{SkaterSummaryQuery, MIN_GAMES_PLAYED, PLAYER_ROW_LIMIT};

mod team;
pub use self::team::TeamSummaryQuery;

mod draft;
pub use self::draft::{DraftQuery, DRAFT_COLUMNS};

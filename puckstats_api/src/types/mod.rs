mod season;
pub use self::season::Season;

mod response;
pub use self::response::{DataResponse, Row, TeamStatSplit, TeamStatsGroup, TeamStatsResponse};

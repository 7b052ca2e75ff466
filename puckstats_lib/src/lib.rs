//! Library layer for puckstats: validated entry points over the NHL stats APIs.
//!
//! Wraps the `puckstats_api` transport with argument validation, range checks,
//! response mapping, and the attendance chart model.

pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod range;
pub mod table;
pub mod validation;

pub use puckstats_api;
pub use puckstats_api::types;

pub use chart::{AttendanceChart, AttendanceRecord, AttendanceSelection, BarSeries};
pub use client::{AttendanceArgs, StatsClient};
pub use config::{SeasonContext, StatsConfig};
pub use error::PuckError;
pub use mapper::TeamPerformance;
pub use table::Table;

//! Shared query infrastructure: the [`Query`] trait, Cayenne filter expressions,
//! sort keys, and the game-type category filter.

use std::fmt;

use chrono::NaiveDate;
use url::Url;

use crate::types::Season;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns the filter expression sent as `cayenneExp`.
    fn cayenne_exp(&self) -> CayenneExp;
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (smallest first).
    Asc,
    /// Descending order (largest first). This is the default.
    #[default]
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        })
    }
}

/// One level of a multi-key sort, rendered as `{"property":..,"direction":..}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub property: &'static str,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn desc(property: &'static str) -> Self {
        Self {
            property,
            direction: SortDirection::Desc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"property":"{}","direction":"{}"}}"#,
            self.property, self.direction
        )
    }
}

/// Renders a list of sort keys as the JSON array the stats API expects.
pub(crate) fn sort_param(keys: &[SortKey]) -> String {
    let keys: Vec<String> = keys.iter().map(ToString::to_string).collect();
    format!("[{}]", keys.join(","))
}

/// Game category filter (`gameTypeId`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameType {
    Preseason = 1,
    #[default]
    RegularSeason = 2,
    Playoffs = 3,
}

impl GameType {
    pub fn id(self) -> i64 {
        self as i64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Comparison {
    Eq,
    Le,
    Ge,
}

impl Comparison {
    fn as_str(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Le => "<=",
            Comparison::Ge => ">=",
        }
    }
}

/// Right-hand side of a predicate. Text operands are double-quoted on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Int(i64),
    Text(String),
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Int(v)
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Int(v.into())
    }
}

impl From<u32> for Operand {
    fn from(v: u32) -> Self {
        Operand::Int(v.into())
    }
}

impl From<NaiveDate> for Operand {
    fn from(d: NaiveDate) -> Self {
        Operand::Text(d.format("%Y-%m-%d").to_string())
    }
}

impl From<Season> for Operand {
    fn from(s: Season) -> Self {
        Operand::Int(s.code())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{}", v),
            Operand::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Predicate {
    field: &'static str,
    comparison: Comparison,
    operand: Operand,
}

/// A conjunction of field predicates in the Cayenne expression syntax used by
/// both NHL APIs, e.g. `gameTypeId=2 and seasonId<=20192020`.
///
/// Predicates render in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CayenneExp {
    predicates: Vec<Predicate>,
}

impl CayenneExp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(self, field: &'static str, operand: impl Into<Operand>) -> Self {
        self.push(field, Comparison::Eq, operand.into())
    }

    pub fn le(self, field: &'static str, operand: impl Into<Operand>) -> Self {
        self.push(field, Comparison::Le, operand.into())
    }

    pub fn ge(self, field: &'static str, operand: impl Into<Operand>) -> Self {
        self.push(field, Comparison::Ge, operand.into())
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    fn push(mut self, field: &'static str, comparison: Comparison, operand: Operand) -> Self {
        self.predicates.push(Predicate {
            field,
            comparison,
            operand,
        });
        self
    }
}

impl fmt::Display for CayenneExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.predicates.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{}{}{}", p.field, p.comparison.as_str(), p.operand)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cayenne_renders_in_insertion_order() {
        let exp = CayenneExp::new()
            .eq("gameTypeId", GameType::RegularSeason.id())
            .le("seasonId", 20192020i64)
            .ge("seasonId", 20182019i64);
        assert_eq!(
            exp.to_string(),
            "gameTypeId=2 and seasonId<=20192020 and seasonId>=20182019"
        );
        assert_eq!(exp.len(), 3);
    }

    #[test]
    fn cayenne_quotes_dates() {
        let date = NaiveDate::from_ymd_opt(2019, 10, 2).unwrap();
        assert_eq!(
            CayenneExp::new().ge("gameDate", date).to_string(),
            r#"gameDate>="2019-10-02""#
        );
    }

    #[test]
    fn empty_cayenne_renders_nothing() {
        let exp = CayenneExp::new();
        assert!(exp.is_empty());
        assert_eq!(exp.to_string(), "");
    }

    #[test]
    fn sort_param_is_json_array() {
        let keys = [SortKey::desc("points"), SortKey::desc("goals")];
        assert_eq!(
            sort_param(&keys),
            r#"[{"property":"points","direction":"DESC"},{"property":"goals","direction":"DESC"}]"#
        );
        let parsed: serde_json::Value = serde_json::from_str(&sort_param(&keys)).unwrap();
        assert_eq!(parsed[1]["property"], "goals");
    }

    #[test]
    fn game_type_ids() {
        assert_eq!(GameType::Preseason.id(), 1);
        assert_eq!(GameType::default().id(), 2);
        assert_eq!(GameType::Playoffs.id(), 3);
    }
}

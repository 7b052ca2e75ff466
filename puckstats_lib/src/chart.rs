//! Attendance bar charts and their Vega-Lite rendering.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::PuckError;

/// Which attendance series to chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttendanceSelection {
    Regular,
    Playoffs,
    Both,
}

impl AttendanceSelection {
    /// At least one of the two flags must be set.
    pub fn from_flags(regular: bool, playoffs: bool) -> Result<Self, PuckError> {
        match (regular, playoffs) {
            (true, true) => Ok(AttendanceSelection::Both),
            (true, false) => Ok(AttendanceSelection::Regular),
            (false, true) => Ok(AttendanceSelection::Playoffs),
            (false, false) => Err(PuckError::InvalidSelection(
                "Must select at least one attendance type".to_string(),
            )),
        }
    }

    fn kinds(self) -> &'static [SeriesKind] {
        match self {
            AttendanceSelection::Regular => &[SeriesKind::Regular],
            AttendanceSelection::Playoffs => &[SeriesKind::Playoff],
            AttendanceSelection::Both => &[SeriesKind::Regular, SeriesKind::Playoff],
        }
    }
}

/// League attendance for one season.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    #[serde(rename = "seasonId")]
    pub season_id: i64,
    pub regular: i64,
    pub playoff: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SeriesKind {
    Regular,
    Playoff,
}

impl SeriesKind {
    fn title(self) -> &'static str {
        match self {
            SeriesKind::Regular => "Regular Attendance",
            SeriesKind::Playoff => "Playoff Attendance",
        }
    }

    fn field(self) -> &'static str {
        match self {
            SeriesKind::Regular => "regular",
            SeriesKind::Playoff => "playoff",
        }
    }

    fn value(self, record: &AttendanceRecord) -> i64 {
        match self {
            SeriesKind::Regular => record.regular,
            SeriesKind::Playoff => record.playoff,
        }
    }
}

/// One bar series: season → attendance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    pub title: String,
    pub field: String,
    pub points: Vec<(i64, i64)>,
}

/// One or two bar series over the same seasons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttendanceChart {
    pub records: Vec<AttendanceRecord>,
    pub series: Vec<BarSeries>,
}

impl AttendanceChart {
    pub fn new(records: Vec<AttendanceRecord>, selection: AttendanceSelection) -> Self {
        let series = selection
            .kinds()
            .iter()
            .map(|kind| BarSeries {
                title: kind.title().to_string(),
                field: kind.field().to_string(),
                points: records
                    .iter()
                    .map(|r| (r.season_id, kind.value(r)))
                    .collect(),
            })
            .collect();
        Self { records, series }
    }

    /// A Vega-Lite spec: a single bar chart, or two side by side.
    pub fn to_vega_lite(&self) -> Value {
        let values: Vec<Value> = self
            .records
            .iter()
            .map(|r| json!({"seasonId": r.season_id, "regular": r.regular, "playoff": r.playoff}))
            .collect();
        let panels: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                json!({
                    "title": s.title,
                    "mark": "bar",
                    "encoding": {
                        "x": {"field": "seasonId", "type": "nominal", "title": "Season"},
                        "y": {"field": s.field, "type": "quantitative", "title": s.title}
                    }
                })
            })
            .collect();

        let schema = "https://vega.github.io/schema/vega-lite/v5.json";
        match panels.as_slice() {
            [single] => {
                let mut spec = single.clone();
                spec["$schema"] = json!(schema);
                spec["data"] = json!({ "values": values });
                spec
            }
            _ => json!({
                "$schema": schema,
                "data": { "values": values },
                "hconcat": panels
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<AttendanceRecord> {
        vec![
            AttendanceRecord {
                season_id: 20002001,
                regular: 18800139,
                playoff: 1604128,
            },
            AttendanceRecord {
                season_id: 20102011,
                regular: 20927625,
                playoff: 1530871,
            },
        ]
    }

    #[test]
    fn selection_requires_a_flag() {
        let err = AttendanceSelection::from_flags(false, false).unwrap_err();
        assert_eq!(err.to_string(), "Must select at least one attendance type");
        assert_eq!(
            AttendanceSelection::from_flags(true, true).unwrap(),
            AttendanceSelection::Both
        );
    }

    #[test]
    fn both_gives_two_series() {
        let chart = AttendanceChart::new(records(), AttendanceSelection::Both);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].title, "Regular Attendance");
        assert_eq!(chart.series[1].points[1], (20102011, 1530871));
    }

    #[test]
    fn single_series() {
        let chart = AttendanceChart::new(records(), AttendanceSelection::Playoffs);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].field, "playoff");
    }

    #[test]
    fn vega_lite_single_is_plain_bar() {
        let spec = AttendanceChart::new(records(), AttendanceSelection::Regular).to_vega_lite();
        assert_eq!(spec["mark"], "bar");
        assert_eq!(spec["encoding"]["y"]["field"], "regular");
        assert_eq!(spec["data"]["values"].as_array().unwrap().len(), 2);
        assert!(spec.get("hconcat").is_none());
    }

    #[test]
    fn vega_lite_both_is_hconcat() {
        let spec = AttendanceChart::new(records(), AttendanceSelection::Both).to_vega_lite();
        let panels = spec["hconcat"].as_array().unwrap();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[1]["title"], "Playoff Attendance");
        assert_eq!(panels[0]["encoding"]["x"]["title"], "Season");
    }
}

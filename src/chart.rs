//! Data handed to the charting widgets; no rendering happens here.

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::SeriesPoint;

/// one plotted line of the projection chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLine {
    pub data_key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

pub const SIMPLE_LINE: ChartLine = ChartLine {
    data_key: "Simple",
    name: "Interés Simple",
    color: "#3b82f6",
};

pub const COMPOUND_LINE: ChartLine = ChartLine {
    data_key: "Compuesto",
    name: "Interés Compuesto",
    color: "#10b981",
};

/// both strategies are always overlaid
pub const PROJECTION_LINES: [ChartLine; 2] = [SIMPLE_LINE, COMPOUND_LINE];

/// pie palette for the allocation chart, reused cyclically
pub const ALLOCATION_COLORS: [&str; 6] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#0088FE", "#00C49F",
];

/// series point keyed the way the line chart reads it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub name: String,
    #[serde(rename = "Simple")]
    pub simple: f64,
    #[serde(rename = "Compuesto")]
    pub compound: f64,
}

impl From<&SeriesPoint> for ChartRow {
    fn from(point: &SeriesPoint) -> Self {
        Self {
            name: point.label.clone(),
            simple: point.simple_total,
            compound: point.compound_total,
        }
    }
}

pub fn chart_rows(series: &[SeriesPoint]) -> Vec<ChartRow> {
    series.iter().map(ChartRow::from).collect()
}

/// json array consumed verbatim by the line chart
pub fn chart_json(series: &[SeriesPoint]) -> Result<String> {
    Ok(serde_json::to_string(&chart_rows(series))?)
}

/// one slice of the allocation-by-type pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub name: String,
    pub value: Money,
    pub color: String,
}

pub fn allocation_slices(allocation: &[(String, Money)]) -> Vec<AllocationSlice> {
    allocation
        .iter()
        .enumerate()
        .map(|(i, (name, value))| AllocationSlice {
            name: name.clone(),
            value: *value,
            color: ALLOCATION_COLORS[i % ALLOCATION_COLORS.len()].to_string(),
        })
        .collect()
}

//! The fixed illustrative efficiency chart shown under every consultation.

use serde::{Deserialize, Serialize};

/// A single labeled point on the illustrative chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Time marker label.
    pub label: String,
    /// Projected efficiency value.
    pub value: u32,
}

impl ChartPoint {
    fn new(label: &str, value: u32) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// The decorative "Projected Impact on Efficiency" chart.
///
/// The chart is illustrative: it has exactly three fixed points and takes
/// no input from the consultation it is rendered beneath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactChart {
    /// Section heading shown above the chart.
    pub title: String,
    /// The three fixed data points.
    pub points: [ChartPoint; 3],
}

impl ImpactChart {
    /// Returns the fixed projection: 10 → 35 → 70 across four weeks.
    pub fn projected() -> Self {
        Self {
            title: "Projected Impact on Efficiency (Est.)".to_string(),
            points: [
                ChartPoint::new("Week 0", 10),
                ChartPoint::new("Week 2", 35),
                ChartPoint::new("Week 4", 70),
            ],
        }
    }
}

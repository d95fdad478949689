use serde::Serialize;

use crate::sequence::Sequence;

/// Data needed to open the line-chart window for a sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `[step index, value]` pairs in sequence order.
    pub points: Vec<[f64; 2]>,
    pub open: bool,
}

impl ChartView {
    pub fn from_sequence(seq: &Sequence) -> Self {
        let points = seq
            .values()
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v as f64])
            .collect();
        Self {
            title: "Collatz Sequence Chart".to_string(),
            x_label: "Step".to_string(),
            y_label: "Value".to_string(),
            points,
            open: true,
        }
    }
}

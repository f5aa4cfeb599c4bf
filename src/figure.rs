//! Backend independent description of the two stacked charts.
//!
//! The figure only frames the data: points keep the table values and order,
//! ranges are derived from them with a small margin.

use super::{min_and_max, StatsTable};
use plotters::style::RGBColor;
use std::ops::Range;

/// 10x8 inches at 100 dpi
pub const FIGURE_SIZE: (u32, u32) = (1000, 800);

pub const ENTROPY_COLOR: RGBColor = RGBColor(255, 165, 0);
pub const LIVE_CELLS_COLOR: RGBColor = RGBColor(0, 0, 255);

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub x_desc: Option<&'static str>,
    pub y_desc: &'static str,
    pub color: RGBColor,
    /// false when the x tick labels are shown by the panel below
    pub x_labels: bool,
    pub grid: bool,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    points: Vec<(f64, f64)>,
}

impl Panel {
    /// all the points in table order, including the non-finite ones
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// contiguous runs of finite points, a non-finite value leaves a gap
    pub fn segments(&self) -> impl Iterator<Item = &[(f64, f64)]> {
        self.points
            .split(|(_, y)| !y.is_finite())
            .filter(|chunk| !chunk.is_empty())
    }
}

/// Two panels in one column sharing the x range.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub size: (u32, u32),
    pub top: Panel,
    pub bottom: Panel,
}

impl Figure {
    pub fn from_table(table: &StatsTable) -> Figure {
        let x: Vec<f64> = table.generation().iter().map(|&g| g as f64).collect();
        let x_range = x_range(&x);
        let top = Panel {
            title: "Entropy over Generations",
            x_desc: None,
            y_desc: "Entropy",
            color: ENTROPY_COLOR,
            x_labels: false,
            grid: true,
            x_range: x_range.clone(),
            y_range: y_range(table.entropy()),
            points: zip_points(&x, table.entropy()),
        };
        let bottom = Panel {
            title: "Live Cell Count over Generations",
            x_desc: Some("Generation"),
            y_desc: "Live Cells",
            color: LIVE_CELLS_COLOR,
            x_labels: true,
            grid: true,
            x_range,
            y_range: y_range(table.live_cells()),
            points: zip_points(&x, table.live_cells()),
        };
        Figure {
            size: FIGURE_SIZE,
            top,
            bottom,
        }
    }

    /// panels from top to bottom
    pub fn panels(&self) -> [&Panel; 2] {
        [&self.top, &self.bottom]
    }
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

/// 5% margin on each side, as for the datetime axis of the load plots
fn x_range(x: &[f64]) -> Range<f64> {
    match min_and_max(x.iter().copied()) {
        None => 0.0..1.0,
        Some((min, max)) if min == max => min - 1.0..max + 1.0,
        Some((min, max)) => {
            let margin = (max - min) / 20.0;
            min - margin..max + margin
        }
    }
}

fn y_range(y: &[f64]) -> Range<f64> {
    match min_and_max(y.iter().copied().filter(|v| v.is_finite())) {
        None => 0.0..1.0,
        Some((min, max)) if min == max => min - 0.5..max + 0.5,
        Some((min, max)) => {
            let margin = (max - min) / 10.0;
            min - margin..max + margin
        }
    }
}

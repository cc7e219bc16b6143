// src/plot_functions/mod.rs

pub mod plot_attitude_overview;
pub mod plot_detection_error;
pub mod plot_quaternion;

use ndarray::Array1;
use std::ops::Range;

use crate::constants::{COLOR_ESTIMATED, COLOR_TRUE, LINE_WIDTH_PLOT};
use crate::data_input::filter_log::FilterLog;
use crate::plot_framework::{zip_time_series, LineStyle, PlotSeries};

/// X range shared by every panel: from zero to the last sample time.
pub fn time_axis(log: &FilterLog) -> Option<Range<f64>> {
    log.duration().map(|end| 0.0..end)
}

/// "time [s]" on the bottom row of a figure, nothing elsewhere.
pub fn time_label(bottom_row: bool) -> String {
    if bottom_row {
        "time [s]".to_string()
    } else {
        String::new()
    }
}

/// Ground truth: black solid line.
pub fn true_series(time: &Array1<f64>, values: &Array1<f64>, with_legend: bool) -> PlotSeries {
    PlotSeries {
        data: zip_time_series(time, values),
        label: if with_legend { "True".to_string() } else { String::new() },
        color: *COLOR_TRUE,
        stroke_width: LINE_WIDTH_PLOT,
        line_style: LineStyle::Solid,
    }
}

/// Filter estimate: red dashed line.
pub fn estimated_series(time: &Array1<f64>, values: &Array1<f64>, with_legend: bool) -> PlotSeries {
    PlotSeries {
        data: zip_time_series(time, values),
        label: if with_legend { "Estimated".to_string() } else { String::new() },
        color: *COLOR_ESTIMATED,
        stroke_width: LINE_WIDTH_PLOT,
        line_style: LineStyle::Dashed,
    }
}

// src/plot_functions/mod.rs

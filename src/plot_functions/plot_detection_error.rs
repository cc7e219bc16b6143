// src/plot_functions/plot_detection_error.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_DETECTION_ERROR, DETECTION_ERROR_PLOT_HEIGHT, DETECTION_ERROR_PLOT_WIDTH,
    LINE_WIDTH_PLOT,
};
use crate::data_input::filter_log::FilterLog;
use crate::plot_framework::{
    calculate_range, draw_grid_plot, value_bounds, zip_time_series, LineStyle, PlotSeries,
};
use crate::plot_functions::{time_axis, time_label};

/// Generates the disturbance-detection error plot.
///
/// Returns `Ok(false)` without writing anything when the log has no detection error column,
/// and whether the panel was actually plotted otherwise.
pub fn plot_detection_error(
    log: &FilterLog,
    output_file: &Path,
    main_title: &str,
) -> Result<bool, Box<dyn Error>> {
    let Some(detection_error) = log.detection_error() else {
        return Ok(false);
    };
    let plot_type_name = "Detection Error";
    let x_range = time_axis(log);
    let time = log.time();

    let plotted = draw_grid_plot(
        output_file,
        main_title,
        plot_type_name,
        (DETECTION_ERROR_PLOT_WIDTH, DETECTION_ERROR_PLOT_HEIGHT),
        (1, 1),
        |_row, _col| {
            let (min, max) = value_bounds(detection_error)?;
            // The error is a relative magnitude, keep zero in view.
            let (y_min, y_max) = calculate_range(min.min(0.0), max);
            Some((
                "Detection error function".to_string(),
                x_range.clone()?,
                y_min..y_max,
                vec![PlotSeries {
                    data: zip_time_series(time, detection_error),
                    label: String::new(),
                    color: COLOR_DETECTION_ERROR,
                    stroke_width: LINE_WIDTH_PLOT,
                    line_style: LineStyle::Solid,
                }],
                time_label(true),
                "|acc| error".to_string(),
            ))
        },
    )?;
    Ok(plotted)
}


// src/plot_functions/plot_detection_error.rs

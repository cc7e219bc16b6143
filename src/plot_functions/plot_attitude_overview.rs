// src/plot_functions/plot_attitude_overview.rs

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::axis_names::euler_axis_label;
use crate::constants::{
    ATTITUDE_PLOT_HEIGHT, ATTITUDE_PLOT_WIDTH, BIAS_RANGE_RAD_S, EULER_RANGE_RAD,
};
use crate::data_input::column_map::Quantity;
use crate::data_input::filter_log::FilterLog;
use crate::plot_framework::{
    calculate_range, draw_grid_plot, symmetric_range, value_bounds, PlotSeries,
};
use crate::plot_functions::{estimated_series, time_axis, time_label, true_series};
use crate::types::PanelPlotData;

const GRID_ROWS: usize = 3;
const GRID_COLS: usize = 3;

const EULER_COLUMN: usize = 0;
const BIAS_COLUMN: usize = 1;
const DISTURBANCE_COLUMN: usize = 2;

/// Euler channel drawn in a given row. The filter writes angles yaw-pitch-roll,
/// so the top "X axis (Roll)" row shows the last channel.
pub fn euler_channel_for_row(row: usize) -> usize {
    GRID_ROWS - 1 - row
}

/// Generates the 3x3 overview: Euler angles, gyro bias and acceleration
/// disturbance, one body axis per row.
pub fn plot_attitude_overview(
    log: &FilterLog,
    output_file: &Path,
    main_title: &str,
) -> Result<(), Box<dyn Error>> {
    let plot_type_name = "Attitude";
    let x_range = time_axis(log);

    draw_grid_plot(
        output_file,
        main_title,
        plot_type_name,
        (ATTITUDE_PLOT_WIDTH, ATTITUDE_PLOT_HEIGHT),
        (GRID_ROWS, GRID_COLS),
        |row, col| {
            let x_range = x_range.clone()?;
            match col {
                EULER_COLUMN => paired_panel(
                    log,
                    (Quantity::EulerTrue, Quantity::EulerEstimated),
                    euler_channel_for_row(row),
                    row,
                    x_range,
                    symmetric_range(EULER_RANGE_RAD),
                    euler_axis_label(row),
                ),
                BIAS_COLUMN => paired_panel(
                    log,
                    (Quantity::BiasTrue, Quantity::BiasEstimated),
                    row,
                    row,
                    x_range,
                    symmetric_range(BIAS_RANGE_RAD_S),
                    String::new(),
                ),
                DISTURBANCE_COLUMN => disturbance_panel(log, row, x_range),
                _ => None,
            }
        },
    )?;
    Ok(())
}

/// True vs estimated panel. Only the top row carries a title and a legend.
fn paired_panel(
    log: &FilterLog,
    (true_quantity, estimated_quantity): (Quantity, Quantity),
    channel: usize,
    row: usize,
    x_range: Range<f64>,
    y_range: Range<f64>,
    y_label: String,
) -> Option<PanelPlotData> {
    let time = log.time();
    let truth = log.channel(true_quantity, channel)?;
    let estimate = log.channel(estimated_quantity, channel)?;
    let with_legend = row == 0;

    let series: Vec<PlotSeries> = vec![
        true_series(time, truth, with_legend),
        estimated_series(time, estimate, with_legend),
    ];
    Some((
        panel_title(true_quantity, row),
        x_range,
        y_range,
        series,
        time_label(row == GRID_ROWS - 1),
        y_label,
    ))
}

/// Ground-truth disturbance only; the filter does not estimate it.
fn disturbance_panel(log: &FilterLog, row: usize, x_range: Range<f64>) -> Option<PanelPlotData> {
    let time = log.time();
    let truth = log.channel(Quantity::AccelDisturbance, row)?;
    let (min, max) = value_bounds(truth)?;
    let (y_min, y_max) = calculate_range(min, max);

    Some((
        panel_title(Quantity::AccelDisturbance, row),
        x_range,
        y_min..y_max,
        vec![true_series(time, truth, row == 0)],
        time_label(row == GRID_ROWS - 1),
        String::new(),
    ))
}

fn panel_title(quantity: Quantity, row: usize) -> String {
    if row == 0 {
        quantity.title()
    } else {
        String::new()
    }
}


// src/plot_functions/plot_attitude_overview.rs

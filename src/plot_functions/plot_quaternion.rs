// src/plot_functions/plot_quaternion.rs

use std::error::Error;
use std::path::Path;

use crate::axis_names::QUATERNION_COMPONENT_NAMES;
use crate::constants::{QUATERNION_PLOT_HEIGHT, QUATERNION_PLOT_WIDTH, QUATERNION_RANGE};
use crate::data_input::column_map::Quantity;
use crate::data_input::filter_log::FilterLog;
use crate::plot_framework::{draw_grid_plot, symmetric_range};
use crate::plot_functions::{estimated_series, time_axis, time_label, true_series};

/// Generates the stacked q0..q3 plot, true vs estimated.
pub fn plot_quaternion(
    log: &FilterLog,
    output_file: &Path,
    main_title: &str,
) -> Result<(), Box<dyn Error>> {
    let plot_type_name = "Quaternion";
    let component_count = Quantity::QuaternionTrue.channel_count();
    let x_range = time_axis(log);
    let time = log.time();

    draw_grid_plot(
        output_file,
        main_title,
        plot_type_name,
        (QUATERNION_PLOT_WIDTH, QUATERNION_PLOT_HEIGHT),
        (component_count, 1),
        |row, _col| {
            let truth = log.channel(Quantity::QuaternionTrue, row)?;
            let estimate = log.channel(Quantity::QuaternionEstimated, row)?;
            Some((
                String::new(),
                x_range.clone()?,
                symmetric_range(QUATERNION_RANGE),
                vec![
                    true_series(time, truth, row == 0),
                    estimated_series(time, estimate, row == 0),
                ],
                time_label(row == component_count - 1),
                QUATERNION_COMPONENT_NAMES[row].to_string(),
            ))
        },
    )?;
    Ok(())
}


// src/plot_functions/plot_quaternion.rs

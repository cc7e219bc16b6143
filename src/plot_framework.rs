// src/plot_framework.rs

use log::{info, warn};
use ndarray::Array1;
use ndarray_stats::QuantileExt;
use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    AUTO_RANGE_MIN_PADDING, AUTO_RANGE_PADDING_RATIO, DASH_LENGTH_PX, DASH_SPACING_PX,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, MAIN_TITLE_MARGIN_PX, X_LABEL_COUNT, Y_LABEL_COUNT,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};
use crate::types::{PanelPlotData, TimeSeriesPoints};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        AUTO_RANGE_MIN_PADDING
    } else {
        range * AUTO_RANGE_PADDING_RATIO
    };
    (min - padding, max + padding)
}

/// Symmetric range `-limit..limit`.
pub fn symmetric_range(limit: f64) -> Range<f64> {
    -limit..limit
}

/// Smallest and largest finite value of a channel, `None` if there is none.
pub fn value_bounds(values: &Array1<f64>) -> Option<(f64, f64)> {
    let finite: Array1<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    match (finite.min(), finite.max()) {
        (Ok(min), Ok(max)) => Some((*min, *max)),
        _ => None,
    }
}

/// Pairs each sample with its time stamp.
pub fn zip_time_series(time: &Array1<f64>, values: &Array1<f64>) -> TimeSeriesPoints {
    time.iter().copied().zip(values.iter().copied()).collect()
}

/// Decimal places needed to tell Y ticks apart over the given range.
pub fn y_label_precision(y_range: &Range<f64>) -> usize {
    let span = (y_range.end - y_range.start).abs();
    if !span.is_finite() || span <= 0.0 {
        return 1;
    }
    // plotters may pick ticks up to twice as dense as requested
    let finest_tick = span / (2 * Y_LABEL_COUNT) as f64;
    (-finest_tick.log10()).ceil().clamp(0.0, 4.0) as usize
}

/// Formats a Y tick label with "k"/"M" notation for large values.
pub fn format_y_axis_label(y: f64, precision: usize) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y == 0.0 {
        "0".to_string()
    } else {
        format!("{:.*}", precision, y)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel_name: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{panel_name} {plot_type} Data Unavailable:\n{reason}");

    // Estimate text dimensions for better centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: TimeSeriesPoints,
    pub label: String, // empty label: drawn, but kept out of the legend
    pub color: RGBColor,
    pub stroke_width: u32,
    pub line_style: LineStyle,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

fn draw_single_axis_chart_with_config(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    let precision = y_label_precision(&plot_config.y_range);
    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .y_label_formatter(&|y| format_y_axis_label(*y, precision))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let style = s.color.stroke_width(s.stroke_width);
        let legend_color = s.color;
        let anno = match s.line_style {
            LineStyle::Solid => chart.draw_series(LineSeries::new(s.data.iter().cloned(), style))?,
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(
                s.data.iter().cloned(),
                DASH_LENGTH_PX,
                DASH_SPACING_PX,
                style,
            ))?,
        };

        if !s.label.is_empty() {
            anno.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    legend_color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// Creates a plot image laid out as a `rows x cols` grid of subplots.
///
/// `get_panel_plot_data(row, col)` supplies each panel; `None` or a panel without
/// drawable data gets a placeholder message instead of a chart.
/// Returns whether at least one panel was plotted.
pub fn draw_grid_plot<'a, F>(
    output_file: &'a Path,
    main_title: &str,
    plot_type_name: &str,
    size: (u32, u32),
    grid: (usize, usize),
    mut get_panel_plot_data: F,
) -> Result<bool, Box<dyn Error>>
where
    F: FnMut(usize, usize) -> Option<PanelPlotData>,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let (rows, cols) = grid;
    let root_area = BitMapBackend::new(output_file, size).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        main_title,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(MAIN_TITLE_MARGIN_PX, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((rows, cols));
    let mut any_panel_plotted = false;

    for row in 0..rows {
        for col in 0..cols {
            let area = &sub_plot_areas[row * cols + col];
            let panel_name = format!("Panel {},{}", row + 1, col + 1);
            match get_panel_plot_data(row, col) {
                Some((chart_title, x_range, y_range, series_data, x_label, y_label)) => {
                    let has_data = series_data.iter().any(|s| !s.data.is_empty());
                    let valid_ranges = x_range.end > x_range.start && y_range.end > y_range.start;
                    if has_data && valid_ranges {
                        let plot_config = PlotConfig {
                            title: chart_title,
                            x_range,
                            y_range,
                            series: series_data,
                            x_label,
                            y_label,
                        };
                        draw_single_axis_chart_with_config(area, &plot_config)?;
                        any_panel_plotted = true;
                    } else {
                        let reason = if !has_data {
                            "No data points"
                        } else {
                            "Invalid ranges"
                        };
                        draw_unavailable_message(area, &panel_name, plot_type_name, reason)?;
                    }
                }
                None => {
                    draw_unavailable_message(
                        area,
                        &panel_name,
                        plot_type_name,
                        "Data Extraction Failed",
                    )?;
                }
            }
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        info!("  {} plot saved as '{}'.", plot_type_name, output_file.display());
    } else {
        warn!(
            "  '{}' holds only placeholder messages: no panel had data to plot.",
            output_file.display()
        );
    }
    Ok(any_panel_plotted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_both_sides() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min + 1.5).abs() < 1e-12);
        assert!((max - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_flat_data() {
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
    }

    #[test]
    fn test_calculate_range_swapped_inputs() {
        assert_eq!(calculate_range(10.0, 0.0), calculate_range(0.0, 10.0));
    }

    #[test]
    fn test_value_bounds_skips_non_finite() {
        let values = Array1::from(vec![f64::NAN, -2.0, 5.0, f64::INFINITY]);
        assert_eq!(value_bounds(&values), Some((-2.0, 5.0)));
        assert_eq!(value_bounds(&Array1::from(vec![f64::NAN])), None);
        assert_eq!(value_bounds(&Array1::<f64>::zeros(0)), None);
    }

    #[test]
    fn test_zip_time_series() {
        let time = Array1::from(vec![0.0, 0.02]);
        let values = Array1::from(vec![1.0, 2.0]);
        assert_eq!(zip_time_series(&time, &values), vec![(0.0, 1.0), (0.02, 2.0)]);
    }

    #[test]
    fn test_symmetric_range() {
        assert_eq!(symmetric_range(3.5), -3.5..3.5);
    }
}

// src/plot_framework.rs

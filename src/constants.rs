// src/constants.rs

use plotters::style::colors::{BLACK, RED};
use plotters::style::RGBColor;

// Input defaults, matching what the filter simulation writes.
pub const DEFAULT_INPUT_FILE: &str = "result.csv";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_MAIN_TITLE: &str = "Omega Feedback Filter (Normal)";
pub const QUATERNION_MAIN_TITLE: &str = "Quaternion";
pub const DETECTION_ERROR_MAIN_TITLE: &str = "Disturbance Detection";

// Output file suffixes: <input stem>_<suffix>.png
pub const ATTITUDE_FILE_SUFFIX: &str = "Attitude";
pub const QUATERNION_FILE_SUFFIX: &str = "Quaternion";
pub const DETECTION_ERROR_FILE_SUFFIX: &str = "DetectionError";

// Plot dimensions (13x7 and 7x7 inch figures at 150 px/inch).
pub const ATTITUDE_PLOT_WIDTH: u32 = 1950;
pub const ATTITUDE_PLOT_HEIGHT: u32 = 1050;
pub const QUATERNION_PLOT_WIDTH: u32 = 1050;
pub const QUATERNION_PLOT_HEIGHT: u32 = 1050;
pub const DETECTION_ERROR_PLOT_WIDTH: u32 = 1950;
pub const DETECTION_ERROR_PLOT_HEIGHT: u32 = 525;

// Fixed symmetric Y ranges.
pub const EULER_RANGE_RAD: f64 = 3.5;
pub const BIAS_RANGE_RAD_S: f64 = 0.08;
pub const QUATERNION_RANGE: f64 = 1.2;

// Padding added by calculate_range for auto-scaled panels.
pub const AUTO_RANGE_PADDING_RATIO: f64 = 0.15;
pub const AUTO_RANGE_MIN_PADDING: f64 = 0.5;

// --- Plot Color Assignments ---
pub const COLOR_TRUE: &RGBColor = &BLACK;
pub const COLOR_ESTIMATED: &RGBColor = &RED;
pub const COLOR_DETECTION_ERROR: RGBColor = RGBColor(31, 119, 180);

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Dashed line pattern in pixels.
pub const DASH_LENGTH_PX: u32 = 8;
pub const DASH_SPACING_PX: u32 = 5;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 28;
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_AXIS_LABEL: i32 = 13;
pub const FONT_SIZE_LEGEND: i32 = 13;
pub const FONT_SIZE_MESSAGE: i32 = 16;

// Space reserved above the subplot grid for the main title.
pub const MAIN_TITLE_MARGIN_PX: u32 = 50;

// Label counts per axis.
pub const X_LABEL_COUNT: usize = 8;
pub const Y_LABEL_COUNT: usize = 7;

// src/constants.rs

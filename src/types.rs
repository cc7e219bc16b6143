// src/types.rs
// Type aliases to reduce complexity warnings

/// Everything needed to draw one subplot panel.
pub type PanelPlotData = (
    String,                                 // title
    std::ops::Range<f64>,                   // x_range
    std::ops::Range<f64>,                   // y_range
    Vec<crate::plot_framework::PlotSeries>, // series
    String,                                 // x_label
    String,                                 // y_label
);

/// Plain (time, value) points for one curve.
pub type TimeSeriesPoints = Vec<(f64, f64)>;

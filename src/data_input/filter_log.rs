// src/data_input/filter_log.rs

use ndarray::Array1;

use crate::data_input::column_map::{Quantity, COLUMN_MAP, REQUIRED_COLUMNS, TIME_COLUMN};

/// One parsed CSV row, indexed by column.
pub type SampleRow = [f64; REQUIRED_COLUMNS];

/// Per-channel time series of one quantity. All channels share the log's time base.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSeries {
    channels: Vec<Array1<f64>>,
}

impl MultiSeries {
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Returns `None` for a channel index outside the quantity's channel count.
    pub fn channel(&self, index: usize) -> Option<&Array1<f64>> {
        self.channels.get(index)
    }

    pub fn channels(&self) -> &[Array1<f64>] {
        &self.channels
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, |c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything read from one filter result file. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterLog {
    time: Array1<f64>,
    series: Vec<MultiSeries>, // indexed by Quantity::index()
    detection_error: Option<Array1<f64>>,
}

impl FilterLog {
    /// Sample times in seconds, in file order.
    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    pub fn series(&self, quantity: Quantity) -> &MultiSeries {
        &self.series[quantity.index()]
    }

    pub fn channel(&self, quantity: Quantity, index: usize) -> Option<&Array1<f64>> {
        self.series(quantity).channel(index)
    }

    /// Disturbance-detection error, present only for logs written by the E1/E2 filters.
    pub fn detection_error(&self) -> Option<&Array1<f64>> {
        self.detection_error.as_ref()
    }

    /// Number of rows read.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time of the last sample, used as the right edge of every plot.
    pub fn duration(&self) -> Option<f64> {
        self.time.iter().next_back().copied()
    }

    /// Mean sample rate in Hz over consecutive rows with distinct timestamps.
    pub fn sample_rate(&self) -> Option<f64> {
        if self.time.len() < 2 {
            return None;
        }
        let mut total_delta = 0.0;
        let mut count = 0;
        for pair in self.time.windows(2) {
            let delta = pair[1] - pair[0];
            if delta > 1e-9 {
                total_delta += delta;
                count += 1;
            }
        }
        if count > 0 {
            Some(count as f64 / total_delta)
        } else {
            None
        }
    }
}

/// Accumulates rows and freezes them into a `FilterLog`.
#[derive(Debug)]
pub struct SeriesBuilder {
    time: Vec<f64>,
    channels: Vec<Vec<Vec<f64>>>, // [quantity][channel][sample]
    detection_error: Option<Vec<f64>>,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        let channels = COLUMN_MAP
            .iter()
            .map(|(_, columns)| vec![Vec::new(); columns.len()])
            .collect();
        Self {
            time: Vec::new(),
            channels,
            detection_error: None,
        }
    }

    /// Appends one row. Whether rows carry a detection error is fixed by the first row;
    /// callers are expected to keep it consistent.
    pub fn push_row(&mut self, row: &SampleRow, detection_error: Option<f64>) {
        if self.time.is_empty() && detection_error.is_some() {
            self.detection_error = Some(Vec::new());
        }
        debug_assert_eq!(
            self.detection_error.is_some(),
            detection_error.is_some(),
            "detection error presence changed mid-log"
        );

        self.time.push(row[TIME_COLUMN]);
        for (quantity_index, (_, columns)) in COLUMN_MAP.iter().enumerate() {
            for (channel, &column) in columns.iter().enumerate() {
                self.channels[quantity_index][channel].push(row[column]);
            }
        }
        if let (Some(values), Some(value)) = (self.detection_error.as_mut(), detection_error) {
            values.push(value);
        }
    }

    pub fn finish(self) -> FilterLog {
        let series = self
            .channels
            .into_iter()
            .map(|channels| MultiSeries {
                channels: channels.into_iter().map(Array1::from).collect(),
            })
            .collect();
        FilterLog {
            time: Array1::from(self.time),
            series,
            detection_error: self.detection_error.map(Array1::from),
        }
    }
}

impl Default for SeriesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_from_base(base: f64) -> SampleRow {
        let mut row = [0.0; REQUIRED_COLUMNS];
        for (column, value) in row.iter_mut().enumerate() {
            *value = base + column as f64;
        }
        row
    }

    #[test]
    fn test_empty_builder_yields_empty_series() {
        let log = SeriesBuilder::new().finish();
        assert!(log.is_empty());
        assert_eq!(log.duration(), None);
        assert_eq!(log.sample_rate(), None);
        assert!(log.detection_error().is_none());
        for quantity in Quantity::ALL {
            let series = log.series(quantity);
            assert_eq!(series.channel_count(), quantity.channel_count());
            assert!(series.is_empty());
        }
    }

    #[test]
    fn test_builder_routes_columns_to_channels() {
        let mut builder = SeriesBuilder::new();
        builder.push_row(&row_from_base(0.0), None);
        builder.push_row(&row_from_base(100.0), None);
        let log = builder.finish();

        assert_eq!(log.len(), 2);
        assert_eq!(log.time().to_vec(), vec![0.0, 100.0]);
        for quantity in Quantity::ALL {
            for (channel, &column) in quantity.columns().iter().enumerate() {
                let values = log.channel(quantity, channel).unwrap();
                assert_eq!(values.to_vec(), vec![column as f64, 100.0 + column as f64]);
            }
        }
        assert!(log.channel(Quantity::EulerTrue, 3).is_none());
    }

    #[test]
    fn test_detection_error_kept_when_first_row_has_it() {
        let mut builder = SeriesBuilder::new();
        builder.push_row(&row_from_base(0.0), Some(0.25));
        builder.push_row(&row_from_base(1.0), Some(0.5));
        let log = builder.finish();
        assert_eq!(log.detection_error().unwrap().to_vec(), vec![0.25, 0.5]);
    }

    #[test]
    fn test_sample_rate_and_duration() {
        let mut builder = SeriesBuilder::new();
        for step in 0..5 {
            let mut row = [0.0; REQUIRED_COLUMNS];
            row[TIME_COLUMN] = step as f64 * 0.02;
            builder.push_row(&row, None);
        }
        let log = builder.finish();
        let rate = log.sample_rate().unwrap();
        assert!((rate - 50.0).abs() < 1e-6, "rate was {}", rate);
        assert!((log.duration().unwrap() - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_sample_rate_ignores_repeated_timestamps() {
        let mut builder = SeriesBuilder::new();
        for time in [0.0, 0.0, 0.0] {
            let mut row = [0.0; REQUIRED_COLUMNS];
            row[TIME_COLUMN] = time;
            builder.push_row(&row, None);
        }
        assert_eq!(builder.finish().sample_rate(), None);
    }
}

// src/data_input/filter_log.rs

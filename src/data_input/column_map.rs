// src/data_input/column_map.rs

//! Column layout of a filter result row.
//!
//! Every row written by the filter is `time` followed by the quantities below,
//! in this exact order. `COLUMN_MAP` is the only place column offsets live;
//! the loader and the plots both go through it.

/// Column holding the sample time in seconds.
pub const TIME_COLUMN: usize = 0;

/// Optional trailing column written by the E1/E2 filter variants.
pub const DETECTION_ERROR_COLUMN: usize = 24;

/// Number of tokens every row must carry.
pub const REQUIRED_COLUMNS: usize = 24;

/// Widest row accepted (required columns plus the detection error).
pub const MAX_COLUMNS: usize = DETECTION_ERROR_COLUMN + 1;

/// A named multi-channel quantity stored in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    EulerTrue,
    EulerEstimated,
    BiasTrue,
    BiasEstimated,
    QuaternionTrue,
    QuaternionEstimated,
    AccelDisturbance,
}

/// Quantity -> channel -> column index.
pub const COLUMN_MAP: [(Quantity, &[usize]); 7] = [
    (Quantity::EulerTrue, &[1, 2, 3]),
    (Quantity::EulerEstimated, &[4, 5, 6]),
    (Quantity::BiasTrue, &[7, 8, 9]),
    (Quantity::BiasEstimated, &[10, 11, 12]),
    (Quantity::QuaternionTrue, &[13, 14, 15, 16]),
    (Quantity::QuaternionEstimated, &[17, 18, 19, 20]),
    (Quantity::AccelDisturbance, &[21, 22, 23]),
];

impl Quantity {
    pub const ALL: [Quantity; 7] = [
        Quantity::EulerTrue,
        Quantity::EulerEstimated,
        Quantity::BiasTrue,
        Quantity::BiasEstimated,
        Quantity::QuaternionTrue,
        Quantity::QuaternionEstimated,
        Quantity::AccelDisturbance,
    ];

    /// Position of this quantity in `COLUMN_MAP` and `Quantity::ALL`.
    pub fn index(self) -> usize {
        match self {
            Quantity::EulerTrue => 0,
            Quantity::EulerEstimated => 1,
            Quantity::BiasTrue => 2,
            Quantity::BiasEstimated => 3,
            Quantity::QuaternionTrue => 4,
            Quantity::QuaternionEstimated => 5,
            Quantity::AccelDisturbance => 6,
        }
    }

    /// CSV columns feeding each channel, in channel order.
    pub fn columns(self) -> &'static [usize] {
        COLUMN_MAP[self.index()].1
    }

    pub fn channel_count(self) -> usize {
        self.columns().len()
    }

    pub fn label(self) -> &'static str {
        match self {
            Quantity::EulerTrue | Quantity::EulerEstimated => "Euler angles",
            Quantity::BiasTrue | Quantity::BiasEstimated => "Bias of Angular velocity",
            Quantity::QuaternionTrue | Quantity::QuaternionEstimated => "Quaternion",
            Quantity::AccelDisturbance => "Acceleration disturbance",
        }
    }

    /// Physical unit, empty for the dimensionless quaternion.
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::EulerTrue | Quantity::EulerEstimated => "rad",
            Quantity::BiasTrue | Quantity::BiasEstimated => "rad/s",
            Quantity::QuaternionTrue | Quantity::QuaternionEstimated => "",
            Quantity::AccelDisturbance => "m/s^2",
        }
    }

    /// Chart title in the form "Euler angles [rad]".
    pub fn title(self) -> String {
        if self.unit().is_empty() {
            self.label().to_string()
        } else {
            format!("{} [{}]", self.label(), self.unit())
        }
    }
}


// src/data_input/column_map.rs

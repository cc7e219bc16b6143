// src/data_input/load_error.rs

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a filter log cannot be loaded. Lines are 1-based, columns 0-based.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}, column {column}: '{token}' is not a number ({source})")]
    Parse {
        line: u64,
        column: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: missing data, found {found} values but {expected} are required")]
    MissingData {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("line {line}: found {found} values, at most {max} are allowed")]
    ExtraData { line: u64, found: usize, max: usize },

    #[error("line {line}: row has {found} values but earlier rows have {expected}")]
    InconsistentWidth {
        line: u64,
        found: usize,
        expected: usize,
    },
}

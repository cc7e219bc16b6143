// src/data_input/series_loader.rs

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::data_input::column_map::{DETECTION_ERROR_COLUMN, MAX_COLUMNS, REQUIRED_COLUMNS};
use crate::data_input::filter_log::{FilterLog, SampleRow, SeriesBuilder};
use crate::data_input::load_error::LoadError;

/// Reads a headerless filter result CSV and splits it into named series.
///
/// Every row must hold `REQUIRED_COLUMNS` numbers, optionally followed by the
/// detection error column. The first row decides whether that column is present
/// and every later row must match. Blank lines are skipped, so an empty file
/// loads as a log with zero rows.
pub fn load_filter_log(input_file_path: &Path) -> Result<FilterLog, LoadError> {
    let file = File::open(input_file_path).map_err(|source| LoadError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    info!("Reading filter log '{}'", input_file_path.display());
    load_filter_log_from_reader(BufReader::new(file))
}

/// Same as [`load_filter_log`] for any byte source.
pub fn load_filter_log_from_reader<R: Read>(source: R) -> Result<FilterLog, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let mut builder = SeriesBuilder::new();
    let mut row_width: Option<usize> = None;

    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map_or(row_index as u64 + 1, |position| position.line());

        // A whitespace-only line trims down to a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            debug!("Skipping blank line {}", line);
            continue;
        }

        let width = record.len();
        if width < REQUIRED_COLUMNS {
            return Err(LoadError::MissingData {
                line,
                found: width,
                expected: REQUIRED_COLUMNS,
            });
        }
        if width > MAX_COLUMNS {
            return Err(LoadError::ExtraData {
                line,
                found: width,
                max: MAX_COLUMNS,
            });
        }
        match row_width {
            Some(expected) if expected != width => {
                return Err(LoadError::InconsistentWidth {
                    line,
                    found: width,
                    expected,
                });
            }
            Some(_) => {}
            None => {
                if width == MAX_COLUMNS {
                    info!("Rows carry a detection error column");
                }
                row_width = Some(width);
            }
        }

        let (row, detection_error) = parse_row(&record, line)?;
        builder.push_row(&row, detection_error);
    }

    let log = builder.finish();
    info!("Finished reading {} data rows.", log.len());
    match log.sample_rate() {
        Some(rate) => info!("Estimated Sample Rate: {:.2} Hz", rate),
        None if !log.is_empty() => {
            warn!("Could not determine sample rate (need >= 2 rows with distinct timestamps).")
        }
        None => {}
    }
    Ok(log)
}

/// Parses a width-checked record into the fixed columns and the optional trailing one.
fn parse_row(record: &StringRecord, line: u64) -> Result<(SampleRow, Option<f64>), LoadError> {
    let parse_column = |column: usize| -> Result<f64, LoadError> {
        let token = record.get(column).unwrap_or_default();
        token.parse::<f64>().map_err(|source| LoadError::Parse {
            line,
            column,
            token: token.to_string(),
            source,
        })
    };

    let mut row: SampleRow = [0.0; REQUIRED_COLUMNS];
    for (column, value) in row.iter_mut().enumerate() {
        *value = parse_column(column)?;
    }
    let detection_error = if record.len() > DETECTION_ERROR_COLUMN {
        Some(parse_column(DETECTION_ERROR_COLUMN)?)
    } else {
        None
    };
    Ok((row, detection_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::column_map::Quantity;

    fn numbered_row(base: f64, width: usize) -> String {
        (0..width)
            .map(|column| format!("{}", base + column as f64))
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn test_parse_row_splits_detection_error() {
        let record = StringRecord::from(
            (0..MAX_COLUMNS).map(|c| c.to_string()).collect::<Vec<_>>(),
        );
        let (row, detection_error) = parse_row(&record, 1).unwrap();
        assert_eq!(row[23], 23.0);
        assert_eq!(detection_error, Some(24.0));
    }

    #[test]
    fn test_whitespace_around_tokens_is_trimmed() {
        let input = numbered_row(0.0, REQUIRED_COLUMNS).replace(',', " , ");
        let log = load_filter_log_from_reader(input.as_bytes()).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.channel(Quantity::AccelDisturbance, 2).unwrap()[0], 23.0);
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_skipped() {
        let input = format!(
            "{}\n\n   \n{}\n\n",
            numbered_row(0.0, REQUIRED_COLUMNS),
            numbered_row(1.0, REQUIRED_COLUMNS)
        );
        let log = load_filter_log_from_reader(input.as_bytes()).unwrap();
        assert_eq!(log.time().to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_lone_comma_row_is_missing_data() {
        let input = format!(
            "{}\n,\n{}\n",
            numbered_row(0.0, REQUIRED_COLUMNS),
            numbered_row(1.0, REQUIRED_COLUMNS)
        );
        match load_filter_log_from_reader(input.as_bytes()) {
            Err(LoadError::MissingData { line, found, expected }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
                assert_eq!(expected, 24);
            }
            other => panic!("expected MissingData, got {:?}", other),
        }
    }

    #[test]
    fn test_row_of_empty_tokens_is_parse_error() {
        let empty_row = vec![""; REQUIRED_COLUMNS].join(",");
        let input = format!(
            "{}\n{}\n{}\n",
            numbered_row(0.0, REQUIRED_COLUMNS),
            empty_row,
            numbered_row(1.0, REQUIRED_COLUMNS)
        );
        match load_filter_log_from_reader(input.as_bytes()) {
            Err(LoadError::Parse { line, column, token, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 0);
                assert!(token.is_empty());
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_error_reports_file_line() {
        let input = format!(
            "{}\n{}\n{}\n",
            numbered_row(0.0, REQUIRED_COLUMNS),
            numbered_row(1.0, REQUIRED_COLUMNS),
            numbered_row(2.0, REQUIRED_COLUMNS - 1)
        );
        match load_filter_log_from_reader(input.as_bytes()) {
            Err(LoadError::MissingData { line, found, expected }) => {
                assert_eq!(line, 3);
                assert_eq!(found, 23);
                assert_eq!(expected, 24);
            }
            other => panic!("expected MissingData, got {:?}", other),
        }
    }
}

// src/data_input/series_loader.rs

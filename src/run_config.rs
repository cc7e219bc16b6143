// src/run_config.rs

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_MAIN_TITLE, DEFAULT_OUTPUT_DIR};

/// Settings for one load-and-render run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub title: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            title: DEFAULT_MAIN_TITLE.to_string(),
        }
    }
}

impl RunConfig {
    /// Input file name without directory or extension, used to name the output images.
    pub fn root_name(&self) -> String {
        self.input_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }

    /// `<output_dir>/<root_name>_<suffix>.png`
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.png", self.root_name(), suffix))
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum RunCommand {
    Run(RunConfig),
    Help,
    Version,
}

#[derive(Debug, Error, PartialEq)]
pub enum UsageError {
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}': only one input file is accepted")]
    UnexpectedArgument(String),
}

/// Parses command-line arguments (program name already stripped).
pub fn parse_args<I>(args: I) -> Result<RunCommand, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = RunConfig::default();
    let mut input_seen = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(RunCommand::Help),
            "-V" | "--version" => return Ok(RunCommand::Version),
            "-o" | "--output-dir" => {
                let value = args.next().ok_or_else(|| UsageError::MissingValue(arg.clone()))?;
                config.output_dir = PathBuf::from(value);
            }
            "-t" | "--title" => {
                config.title = args.next().ok_or_else(|| UsageError::MissingValue(arg.clone()))?;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(UsageError::UnknownOption(arg));
            }
            _ => {
                if input_seen {
                    return Err(UsageError::UnexpectedArgument(arg));
                }
                config.input_path = PathBuf::from(arg);
                input_seen = true;
            }
        }
    }

    Ok(RunCommand::Run(config))
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} [INPUT.csv] [--output-dir DIR] [--title TEXT]\n\
         \n\
         Renders an Omega Feedback Filter result log as PNG plots.\n\
         \n\
         Arguments:\n\
         \x20 INPUT.csv              Filter result log (default: {})\n\
         \n\
         Options:\n\
         \x20 -o, --output-dir DIR   Directory for the images (default: {})\n\
         \x20 -t, --title TEXT       Title of the attitude figure (default: \"{}\")\n\
         \x20 -h, --help             Print this help\n\
         \x20 -V, --version          Print version",
        program_name(program),
        DEFAULT_INPUT_FILE,
        DEFAULT_OUTPUT_DIR,
        DEFAULT_MAIN_TITLE
    )
}

fn program_name(program: &str) -> String {
    Path::new(program)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_read_result_csv() {
        let command = parse_args(args(&[])).unwrap();
        let RunCommand::Run(config) = command else {
            panic!("expected Run, got {:?}", command);
        };
        assert_eq!(config.input_path, PathBuf::from("result.csv"));
        assert_eq!(config.title, "Omega Feedback Filter (Normal)");
        assert_eq!(config.output_path("Attitude"), Path::new(".").join("result_Attitude.png"));
    }

    #[test]
    fn test_input_and_options() {
        let command = parse_args(args(&[
            "logs/e1.csv",
            "--output-dir",
            "out",
            "-t",
            "Omega Feedback Filter (E1)",
        ]))
        .unwrap();
        assert_eq!(
            command,
            RunCommand::Run(RunConfig {
                input_path: PathBuf::from("logs/e1.csv"),
                output_dir: PathBuf::from("out"),
                title: "Omega Feedback Filter (E1)".to_string(),
            })
        );
    }

    #[test]
    fn test_root_name_strips_directory_and_extension() {
        let config = RunConfig {
            input_path: PathBuf::from("logs/e2_run.csv"),
            ..RunConfig::default()
        };
        assert_eq!(config.root_name(), "e2_run");
        assert_eq!(
            config.output_path("Quaternion"),
            Path::new(".").join("e2_run_Quaternion.png")
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(args(&["--help"])).unwrap(), RunCommand::Help);
        assert_eq!(parse_args(args(&["a.csv", "-V"])).unwrap(), RunCommand::Version);
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(
            parse_args(args(&["--output-dir"])),
            Err(UsageError::MissingValue("--output-dir".to_string()))
        );
        assert_eq!(
            parse_args(args(&["--bogus"])),
            Err(UsageError::UnknownOption("--bogus".to_string()))
        );
        assert_eq!(
            parse_args(args(&["a.csv", "b.csv"])),
            Err(UsageError::UnexpectedArgument("b.csv".to_string()))
        );
    }

    #[test]
    fn test_usage_mentions_defaults() {
        let text = usage("/usr/bin/omega-plot");
        assert!(text.starts_with("Usage: omega-plot"));
        assert!(text.contains("result.csv"));
    }
}

// src/lib.rs - Loader and figure renderers for Omega Feedback Filter result logs

pub mod axis_names;
pub mod constants;
pub mod data_input;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod run_config;
pub mod types;

// Expose crate version for `--version`.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

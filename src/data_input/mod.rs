// src/data_input/mod.rs

pub mod column_map;
pub mod filter_log;
pub mod load_error;
pub mod series_loader;

// src/data_input/mod.rs

// src/plot_functions/mod.rs

pub mod plot_chakrabarti;
pub mod plot_elevation_timeseries;
pub mod plot_matrix;
pub mod plot_spectrum;

// src/plot_functions/mod.rs

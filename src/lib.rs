// src/lib.rs - Library interface for wave diagnostic plots

pub mod constants;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod plotting_utils;

pub use data_input::table::{Table, TableIndex};
pub use data_input::wave_data::{Series, WaveData};
pub use error::PlotError;
pub use plot_framework::{Axes, Figure};
pub use plot_functions::plot_chakrabarti::plot_chakrabarti;
pub use plot_functions::plot_elevation_timeseries::plot_elevation_timeseries;
pub use plot_functions::plot_matrix::{plot_matrix, MatrixPlotOptions};
pub use plot_functions::plot_spectrum::{plot_spectrum, to_angular_frequency};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

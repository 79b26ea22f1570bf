// src/data_input/mod.rs

pub mod table;
pub mod wave_data;

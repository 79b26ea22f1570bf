// src/data_input/wave_data.rs

use ndarray::{Array1, ArrayD};

use crate::data_input::table::Table;
use crate::error::PlotError;

/// A named 1-D column of values, e.g. one column pulled out of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Array1<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: Array1::from(values),
        }
    }
}

/// The closed set of input shapes accepted by the plotting functions.
#[derive(Debug, Clone, PartialEq)]
pub enum WaveData {
    Scalar(f64),
    Array(ArrayD<f64>),
    Series(Series),
    Table(Table),
}

impl WaveData {
    pub fn kind(&self) -> &'static str {
        match self {
            WaveData::Scalar(_) => "a scalar",
            WaveData::Array(_) => "an array",
            WaveData::Series(_) => "a series",
            WaveData::Table(_) => "a table",
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, WaveData::Array(_) | WaveData::Series(_))
    }

    /// Borrows the table, or fails with a type error naming the argument.
    pub fn as_table(&self, name: &'static str) -> Result<&Table, PlotError> {
        match self {
            WaveData::Table(table) => Ok(table),
            other => Err(PlotError::Type {
                name,
                expected: "a table",
                found: other.kind(),
            }),
        }
    }

    /// Shape with singleton dimensions removed. Scalars have the empty shape.
    pub fn squeezed_shape(&self, name: &'static str) -> Result<Vec<usize>, PlotError> {
        match self {
            WaveData::Scalar(_) => Ok(Vec::new()),
            WaveData::Array(values) => Ok(squeeze(values.shape())),
            WaveData::Series(series) => Ok(squeeze(series.values.shape())),
            WaveData::Table(_) => Err(self.numeric_type_error(name)),
        }
    }

    /// Values in logical (row-major) order. A scalar yields one value.
    pub fn flat_values(&self, name: &'static str) -> Result<Vec<f64>, PlotError> {
        match self {
            WaveData::Scalar(v) => Ok(vec![*v]),
            WaveData::Array(values) => Ok(values.iter().copied().collect()),
            WaveData::Series(series) => Ok(series.values.to_vec()),
            WaveData::Table(_) => Err(self.numeric_type_error(name)),
        }
    }

    fn numeric_type_error(&self, name: &'static str) -> PlotError {
        PlotError::Type {
            name,
            expected: "a real numeric type",
            found: self.kind(),
        }
    }
}

fn squeeze(shape: &[usize]) -> Vec<usize> {
    shape.iter().copied().filter(|&n| n != 1).collect()
}

impl From<f64> for WaveData {
    fn from(value: f64) -> Self {
        WaveData::Scalar(value)
    }
}

impl From<i32> for WaveData {
    fn from(value: i32) -> Self {
        WaveData::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for WaveData {
    fn from(values: Vec<f64>) -> Self {
        WaveData::Array(Array1::from(values).into_dyn())
    }
}

impl From<Array1<f64>> for WaveData {
    fn from(values: Array1<f64>) -> Self {
        WaveData::Array(values.into_dyn())
    }
}

impl From<ArrayD<f64>> for WaveData {
    fn from(values: ArrayD<f64>) -> Self {
        WaveData::Array(values)
    }
}

impl From<Series> for WaveData {
    fn from(series: Series) -> Self {
        WaveData::Series(series)
    }
}

impl From<Table> for WaveData {
    fn from(table: Table) -> Self {
        WaveData::Table(table)
    }
}

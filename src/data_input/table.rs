// src/data_input/table.rs

use chrono::NaiveDateTime;
use ndarray::{Array2, ArrayView1, Axis};

use crate::error::PlotError;

/// Row index of a [`Table`]: frequencies or seconds, or wall-clock timestamps.
#[derive(Debug, Clone, PartialEq)]
pub enum TableIndex {
    Numeric(Vec<f64>),
    DateTime(Vec<NaiveDateTime>),
}

impl TableIndex {
    pub fn len(&self) -> usize {
        match self {
            TableIndex::Numeric(values) => values.len(),
            TableIndex::DateTime(stamps) => stamps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn numeric(&self) -> Option<&[f64]> {
        match self {
            TableIndex::Numeric(values) => Some(values),
            TableIndex::DateTime(_) => None,
        }
    }

    /// Index as plottable x values. Timestamps become seconds since the first one.
    pub fn as_seconds(&self) -> Vec<f64> {
        match self {
            TableIndex::Numeric(values) => values.clone(),
            TableIndex::DateTime(stamps) => match stamps.first() {
                Some(&origin) => stamps
                    .iter()
                    .map(|t| (*t - origin).num_milliseconds() as f64 / 1000.0)
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    /// First timestamp of a datetime index.
    pub fn datetime_origin(&self) -> Option<NaiveDateTime> {
        match self {
            TableIndex::DateTime(stamps) => stamps.first().copied(),
            TableIndex::Numeric(_) => None,
        }
    }

    /// Tick label text for each row.
    pub fn labels(&self) -> Vec<String> {
        match self {
            TableIndex::Numeric(values) => values.iter().map(|v| v.to_string()).collect(),
            TableIndex::DateTime(stamps) => stamps
                .iter()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .collect(),
        }
    }
}

/// A 2D numeric table with a row index and named columns.
///
/// Values are stored row-major, one row per index entry. Missing cells are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index: TableIndex,
    columns: Vec<String>,
    values: Array2<f64>,
}

impl Table {
    pub fn new(
        index: TableIndex,
        columns: Vec<String>,
        values: Array2<f64>,
    ) -> Result<Self, PlotError> {
        let (n_rows, n_cols) = values.dim();
        if n_rows != index.len() || n_cols != columns.len() {
            return Err(PlotError::ShapeMismatch(format!(
                "table values are {n_rows}x{n_cols} but index has {} entries and {} columns are named",
                index.len(),
                columns.len()
            )));
        }
        Ok(Self {
            index,
            columns,
            values,
        })
    }

    /// Builds a table from named columns of equal length.
    pub fn from_columns(
        index: TableIndex,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self, PlotError> {
        let n_rows = index.len();
        if let Some((name, data)) = columns.iter().find(|(_, data)| data.len() != n_rows) {
            return Err(PlotError::ShapeMismatch(format!(
                "column '{name}' has {} values but the index has {n_rows}",
                data.len()
            )));
        }
        let values = Array2::from_shape_fn((n_rows, columns.len()), |(r, c)| columns[c].1[r]);
        let names = columns.into_iter().map(|(name, _)| name).collect();
        Self::new(index, names, values)
    }

    pub fn index(&self) -> &TableIndex {
        &self.index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    pub fn column(&self, col: usize) -> ArrayView1<'_, f64> {
        self.values.index_axis(Axis(1), col)
    }

    /// Returns the index as frequencies, checking it is numeric, non-negative
    /// and strictly increasing.
    pub fn ensure_frequency_index(&self) -> Result<&[f64], PlotError> {
        let freqs = match &self.index {
            TableIndex::Numeric(values) => values.as_slice(),
            TableIndex::DateTime(_) => {
                return Err(PlotError::InvalidIndex(
                    "frequency index must be numeric, found timestamps".to_string(),
                ))
            }
        };
        if let Some(&f) = freqs.iter().find(|f| !f.is_finite() || **f < 0.0) {
            return Err(PlotError::InvalidIndex(format!(
                "frequency {f} is negative or not finite"
            )));
        }
        if let Some(pair) = freqs.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(PlotError::InvalidIndex(format!(
                "frequency index is not strictly increasing at {} -> {}",
                pair[0], pair[1]
            )));
        }
        Ok(freqs)
    }

    /// Returns a new table with the index mapped through `index_fn` and every
    /// value mapped through `value_fn`. Column names are kept.
    pub fn map_numeric<F, G>(&self, index_fn: F, value_fn: G) -> Result<Table, PlotError>
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        let index = match &self.index {
            TableIndex::Numeric(values) => values.iter().map(|&v| index_fn(v)).collect(),
            TableIndex::DateTime(_) => {
                return Err(PlotError::InvalidIndex(
                    "cannot rescale a datetime index".to_string(),
                ))
            }
        };
        Table::new(
            TableIndex::Numeric(index),
            self.columns.clone(),
            self.values.mapv(value_fn),
        )
    }
}

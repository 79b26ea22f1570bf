// src/plot_functions/plot_matrix.rs

use log::debug;

use crate::constants::{
    COLOR_CELL_TEXT, DEFAULT_MATRIX_X_LABEL, DEFAULT_MATRIX_Y_LABEL, FONT_SIZE_CELL_VALUE,
};
use crate::data_input::wave_data::WaveData;
use crate::error::PlotError;
use crate::plot_framework::{Annotation, Axes, Colorbar, ImageGrid, TextAnchor};
use crate::plotting_utils::{colormap_limits, format_cell_value};

/// Labels and annotation toggle for [`plot_matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixPlotOptions {
    pub x_label: String,
    pub y_label: String,
    /// Colorbar label.
    pub z_label: Option<String>,
    /// Write each finite cell value on the grid.
    pub show_values: bool,
}

impl Default for MatrixPlotOptions {
    fn default() -> Self {
        Self {
            x_label: DEFAULT_MATRIX_X_LABEL.to_string(),
            y_label: DEFAULT_MATRIX_Y_LABEL.to_string(),
            z_label: None,
            show_values: true,
        }
    }
}

/// Plots a performance matrix (e.g. capture length by Hm0 and Te) as a grid.
///
/// Rows run bottom to top, columns left to right. Tick labels come from the
/// table index (y) and column names (x).
pub fn plot_matrix(
    matrix: &WaveData,
    options: &MatrixPlotOptions,
    ax: &mut Axes,
) -> Result<(), PlotError> {
    let table = matrix.as_table("M")?;
    let values = table.values();


    // Cells and colorbar share one scale
    let (min, max) = colormap_limits(values);
    ax.set_image(ImageGrid {
        values: values.clone(),
        min,
        max,
    });
    ax.set_colorbar(Colorbar {
        min,
        max,
        label: options.z_label.clone(),
    });

    ax.set_x_label(options.x_label.as_str());
    ax.set_y_label(options.y_label.as_str());

    let mut annotated = 0;
    if options.show_values {
        for ((row, col), &value) in values.indexed_iter() {
            if !value.is_finite() {
                continue;
            }
            ax.annotate(Annotation {
                text: format_cell_value(value),
                position: (col as f64, row as f64),
                font_size: FONT_SIZE_CELL_VALUE,
                italic: false,
                anchor: TextAnchor::Center,
                color: *COLOR_CELL_TEXT,
            });
            annotated += 1;
        }
    }

    ax.set_x_ticks(
        table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, name)| (i as f64, name.clone()))
            .collect(),
    );
    ax.set_y_ticks(
        table
            .index()
            .labels()
            .into_iter()
            .enumerate()
            .map(|(j, label)| (j as f64, label))
            .collect(),
    );

    debug!(
        "plot_matrix: {}x{} cells, {annotated} annotated",
        table.n_rows(),
        table.n_cols()
    );
    Ok(())
}

// src/plot_functions/plot_spectrum.rs

use std::f64::consts::PI;

use log::debug;

use crate::constants::{LABEL_OMEGA, LABEL_SPECTRAL_DENSITY};
use crate::data_input::table::Table;
use crate::data_input::wave_data::WaveData;
use crate::error::PlotError;
use crate::plot_framework::Axes;

/// Rescales a spectral density table from frequency [Hz] to angular
/// frequency [rad/s]. The index is multiplied by 2 pi and the density divided
/// by 2 pi, so the area under each spectrum is unchanged.
pub fn to_angular_frequency(spectrum: &Table) -> Result<Table, PlotError> {
    spectrum.ensure_frequency_index()?;
    spectrum.map_numeric(|f| f * 2.0 * PI, |s| s / (2.0 * PI))
}

/// Plots wave spectral density against angular frequency, one line per column.
///
/// `spectral_density` must be a table of spectral density [m^2/Hz] indexed by
/// frequency [Hz]. The input is checked before anything is drawn on `ax`, so
/// a rejected table leaves the surface as it was.
pub fn plot_spectrum(spectral_density: &WaveData, ax: &mut Axes) -> Result<(), PlotError> {
    let table = spectral_density.as_table("spectral density")?;
    let angular = to_angular_frequency(table)?;

    let omega = angular.index().numeric().ok_or_else(|| {
        PlotError::InvalidIndex("angular frequency index is not numeric".to_string())
    })?;

    for (col, name) in angular.columns().iter().enumerate() {
        let data = omega
            .iter()
            .zip(angular.column(col).iter())
            .map(|(&w, &s)| (w, s))
            .collect();
        ax.plot(data, name.as_str());
    }
    ax.set_x_label(LABEL_OMEGA);
    ax.set_y_label(LABEL_SPECTRAL_DENSITY);

    debug!(
        "plot_spectrum: {} spectra, {} frequencies",
        angular.n_cols(),
        angular.n_rows()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::table::TableIndex;

    fn sample_spectrum() -> Table {
        Table::from_columns(
            TableIndex::Numeric(vec![0.0, 0.05, 0.1, 0.15, 0.2]),
            vec![
                ("JONSWAP".to_string(), vec![0.0, 1.0, 4.0, 2.0, 0.5]),
                ("Pierson-Moskowitz".to_string(), vec![0.0, 0.8, 3.0, 1.5, 0.4]),
            ],
        )
        .unwrap()
    }

    fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
        x.windows(2)
            .zip(y.windows(2))
            .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
            .sum()
    }

    #[test]
    fn test_angular_transform_scales_index() {
        let spectrum = sample_spectrum();
        let angular = to_angular_frequency(&spectrum).unwrap();
        assert_eq!(angular.n_rows(), spectrum.n_rows());
        let (TableIndex::Numeric(f), TableIndex::Numeric(w)) = (spectrum.index(), angular.index())
        else {
            panic!("expected numeric indices");
        };
        for (f, w) in f.iter().zip(w) {
            assert!((w - f * 2.0 * PI).abs() < 1e-12);
        }
    }

    #[test]
    fn test_angular_transform_preserves_area() {
        let spectrum = sample_spectrum();
        let angular = to_angular_frequency(&spectrum).unwrap();
        let (TableIndex::Numeric(f), TableIndex::Numeric(w)) = (spectrum.index(), angular.index())
        else {
            panic!("expected numeric indices");
        };
        for col in 0..spectrum.n_cols() {
            let hz_area = trapezoid(f, &spectrum.column(col).to_vec());
            let rad_area = trapezoid(w, &angular.column(col).to_vec());
            assert!((hz_area - rad_area).abs() < 1e-12);
        }
    }

    #[test]
    fn test_plot_spectrum_one_line_per_column() {
        let mut ax = Axes::new();
        plot_spectrum(&WaveData::from(sample_spectrum()), &mut ax).unwrap();
        assert_eq!(ax.series().len(), 2);
        assert_eq!(ax.series()[0].label, "JONSWAP");
        assert_eq!(ax.series()[1].data.len(), 5);
        assert_eq!(ax.x_label(), "omega [rad/s]");
        assert_eq!(ax.y_label(), "Spectral density [m^2 s/rad]");
        let (w, s) = ax.series()[0].data[2];
        assert!((w - 0.2 * PI).abs() < 1e-12);
        assert!((s - 4.0 / (2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_plot_spectrum_rejects_non_table() {
        let err = plot_spectrum(&WaveData::from(vec![1.0, 2.0]), &mut Axes::new()).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_plot_spectrum_rejects_unsorted_frequencies() {
        let table = Table::from_columns(
            TableIndex::Numeric(vec![0.2, 0.1]),
            vec![("S".to_string(), vec![1.0, 2.0])],
        )
        .unwrap();
        let result = plot_spectrum(&WaveData::from(table), &mut Axes::new());
        assert!(matches!(result, Err(PlotError::InvalidIndex(_))));
    }

    #[test]
    fn test_plot_spectrum_draws_on_given_surface() {
        let mut existing = Axes::new();
        existing.plot(vec![(0.0, 0.0), (1.0, 1.0)], "earlier");
        plot_spectrum(&WaveData::from(sample_spectrum()), &mut existing).unwrap();
        assert_eq!(existing.series().len(), 3);
        assert_eq!(existing.series()[0].label, "earlier");
    }

    #[test]
    fn test_rejected_spectrum_keeps_existing_drawing() {
        let mut existing = Axes::new();
        existing.plot(vec![(0.0, 0.0), (1.0, 1.0)], "earlier");
        existing.set_title("sea state 3");
        let before = existing.clone();

        let unsorted = Table::from_columns(
            TableIndex::Numeric(vec![0.2, 0.1]),
            vec![("S".to_string(), vec![1.0, 2.0])],
        )
        .unwrap();
        assert!(plot_spectrum(&WaveData::from(unsorted), &mut existing).is_err());
        assert!(plot_spectrum(&WaveData::from(1.0), &mut existing).is_err());
        assert_eq!(existing, before);
    }
}

// src/plot_functions/plot_elevation_timeseries.rs

use log::debug;

use crate::constants::{LABEL_ELEVATION, LABEL_TIME};
use crate::data_input::wave_data::WaveData;
use crate::error::PlotError;
use crate::plot_framework::{Axes, TickFormat};

/// Plots wave surface elevation [m] against time, one line per column.
///
/// A timestamp index is drawn as seconds from the first sample, with wall
/// clock tick labels.
pub fn plot_elevation_timeseries(eta: &WaveData, ax: &mut Axes) -> Result<(), PlotError> {
    let table = eta.as_table("eta")?;
    let time = table.index().as_seconds();

    for (col, name) in table.columns().iter().enumerate() {
        let data = time
            .iter()
            .zip(table.column(col).iter())
            .map(|(&t, &z)| (t, z))
            .collect();
        ax.plot(data, name.as_str());
    }
    if let Some(origin) = table.index().datetime_origin() {
        ax.set_x_tick_format(TickFormat::ElapsedSince(origin));
    }
    ax.set_x_label(LABEL_TIME);
    ax.set_y_label(LABEL_ELEVATION);

    debug!(
        "plot_elevation_timeseries: {} series, {} samples",
        table.n_cols(),
        table.n_rows()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::table::{Table, TableIndex};
    use chrono::NaiveDate;

    #[test]
    fn test_plot_elevation_numeric_index() {
        let table = Table::from_columns(
            TableIndex::Numeric(vec![0.0, 0.5, 1.0, 1.5]),
            vec![
                ("probe 1".to_string(), vec![0.1, 0.3, -0.2, 0.0]),
                ("probe 2".to_string(), vec![0.0, 0.2, -0.1, 0.1]),
            ],
        )
        .unwrap();
        let mut ax = Axes::new();
        plot_elevation_timeseries(&WaveData::from(table), &mut ax).unwrap();
        assert_eq!(ax.series().len(), 2);
        assert_eq!(ax.series()[0].data[2], (1.0, -0.2));
        assert_eq!(ax.x_label(), "Time");
        assert_eq!(ax.y_label(), "eta [m]");
        assert_eq!(ax.x_tick_format(), TickFormat::Numeric);
    }

    #[test]
    fn test_plot_elevation_datetime_index() {
        let day = NaiveDate::from_ymd_opt(2023, 7, 14).unwrap();
        let stamps = vec![
            day.and_hms_opt(0, 0, 0).unwrap(),
            day.and_hms_opt(0, 0, 1).unwrap(),
            day.and_hms_opt(0, 0, 2).unwrap(),
        ];
        let origin = stamps[0];
        let table = Table::from_columns(
            TableIndex::DateTime(stamps),
            vec![("eta".to_string(), vec![0.5, -0.5, 0.25])],
        )
        .unwrap();
        let mut ax = Axes::new();
        plot_elevation_timeseries(&WaveData::from(table), &mut ax).unwrap();
        let xs: Vec<f64> = ax.series()[0].data.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(ax.x_tick_format(), TickFormat::ElapsedSince(origin));
    }

    #[test]
    fn test_plot_elevation_rejects_scalar() {
        let err = plot_elevation_timeseries(&WaveData::from(42), &mut Axes::new()).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_rejected_elevation_keeps_existing_drawing() {
        let mut existing = Axes::new();
        existing.plot(vec![(0.0, 0.1), (1.0, -0.1)], "buoy");
        let before = existing.clone();
        let result = plot_elevation_timeseries(&WaveData::from(vec![0.1, 0.2]), &mut existing);
        assert!(result.unwrap_err().is_type_error());
        assert_eq!(existing, before);
    }
}

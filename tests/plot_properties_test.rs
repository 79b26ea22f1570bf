// tests/plot_properties_test.rs

use chrono::NaiveDate;
use ndarray::array;
use wave_graphics::plot_framework::AxisScale;
use wave_graphics::{
    plot_chakrabarti, plot_elevation_timeseries, plot_matrix, plot_spectrum, to_angular_frequency,
    Axes, Figure, MatrixPlotOptions, PlotError, Series, Table, TableIndex, WaveData,
};

fn spectrum_table() -> Table {
    let freqs = vec![0.05, 0.1, 0.15, 0.2, 0.25];
    Table::from_columns(
        TableIndex::Numeric(freqs),
        vec![
            ("JONSWAP".to_string(), vec![0.0, 1.2, 3.4, 1.1, 0.3]),
            ("Pierson-Moskowitz".to_string(), vec![0.1, 1.0, 2.8, 1.3, 0.4]),
        ],
    )
    .unwrap()
}

fn capture_length_matrix(center: f64) -> Table {
    Table::new(
        TableIndex::Numeric(vec![0.5, 1.5, 2.5]),
        vec!["6".to_string(), "8".to_string(), "10".to_string()],
        array![[1.0, 2.5, 3.0], [1.25, center, 3.5], [0.75, 2.0, 2.25]],
    )
    .unwrap()
}

#[test]
fn test_angular_frequency_index_is_scaled() {
    let table = spectrum_table();
    let angular = to_angular_frequency(&table).unwrap();
    assert_eq!(angular.n_rows(), table.n_rows());
    let original = table.index().numeric().unwrap();
    let scaled = angular.index().numeric().unwrap();
    for (w, f) in scaled.iter().zip(original) {
        assert!((w - 2.0 * std::f64::consts::PI * f).abs() < 1e-12);
    }
}

#[test]
fn test_matrix_annotation_counts() {
    let options = MatrixPlotOptions::default();
    let mut full = Axes::new();
    plot_matrix(&WaveData::from(capture_length_matrix(4.0)), &options, &mut full).unwrap();
    assert_eq!(full.annotations().len(), 9);

    let mut gap = Axes::new();
    plot_matrix(
        &WaveData::from(capture_length_matrix(f64::NAN)),
        &options,
        &mut gap,
    )
    .unwrap();
    assert_eq!(gap.annotations().len(), 8);
}

#[test]
fn test_chakrabarti_single_sample_has_no_legend() {
    let mut ax = Axes::new();
    plot_chakrabarti(
        &WaveData::from(8),
        &WaveData::from(200),
        &WaveData::from(5),
        &mut ax,
    )
    .unwrap();
    assert_eq!(ax.markers().len(), 1);
    assert!(ax.legend().is_none());
    assert_eq!(ax.x_scale(), AxisScale::Log);
    assert_eq!(ax.y_scale(), AxisScale::Log);
    assert_eq!(ax.x_range(), 0.01..10.0);
    assert_eq!(ax.y_range(), 0.01..50.0);
}

#[test]
fn test_chakrabarti_several_samples_have_legend() {
    let mut ax = Axes::new();
    plot_chakrabarti(
        &WaveData::from(vec![8.0, 8.0]),
        &WaveData::from(Series::new("wavelength", vec![200.0, 200.0])),
        &WaveData::from(vec![5.0, 15.0]),
        &mut ax,
    )
    .unwrap();
    assert_eq!(ax.markers().len(), 2);
    let legend = ax.legend().unwrap();
    assert_eq!(legend.columns, 2);
}

#[test]
fn test_chakrabarti_shape_mismatch() {
    let result = plot_chakrabarti(
        &WaveData::from(vec![8.0, 8.0]),
        &WaveData::from(vec![200.0]),
        &WaveData::from(vec![5.0, 15.0]),
        &mut Axes::new(),
    );
    assert!(matches!(result, Err(PlotError::ShapeMismatch(_))));
}

#[test]
fn test_chakrabarti_rejects_table() {
    let result = plot_chakrabarti(
        &WaveData::from(spectrum_table()),
        &WaveData::from(200),
        &WaveData::from(5),
        &mut Axes::new(),
    );
    assert!(matches!(result, Err(PlotError::Type { name: "H", .. })));
}

#[test]
fn test_type_errors_before_drawing() {
    assert!(plot_spectrum(&WaveData::from(vec![1.0, 2.0]), &mut Axes::new())
        .unwrap_err()
        .is_type_error());
    assert!(plot_elevation_timeseries(&WaveData::from(42), &mut Axes::new())
        .unwrap_err()
        .is_type_error());
}

#[test]
fn test_plotters_are_repeatable() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let eta = WaveData::from(
        Table::from_columns(
            TableIndex::DateTime(vec![
                day.and_hms_opt(12, 0, 0).unwrap(),
                day.and_hms_opt(12, 0, 1).unwrap(),
                day.and_hms_opt(12, 0, 2).unwrap(),
            ]),
            vec![("eta".to_string(), vec![0.2, -0.4, 0.1])],
        )
        .unwrap(),
    );
    let spectrum = WaveData::from(spectrum_table());
    let matrix = WaveData::from(capture_length_matrix(4.0));
    let options = MatrixPlotOptions::default();

    let runs: Vec<Vec<Axes>> = (0..2)
        .map(|_| {
            let mut surfaces = vec![Axes::new(), Axes::new(), Axes::new(), Axes::new()];
            plot_spectrum(&spectrum, &mut surfaces[0]).unwrap();
            plot_elevation_timeseries(&eta, &mut surfaces[1]).unwrap();
            plot_matrix(&matrix, &options, &mut surfaces[2]).unwrap();
            plot_chakrabarti(
                &WaveData::from(vec![8.0, 4.0]),
                &WaveData::from(vec![200.0, 90.0]),
                &WaveData::from(vec![5.0, 15.0]),
                &mut surfaces[3],
            )
            .unwrap();
            surfaces
        })
        .collect();

    for (first, second) in runs[0].iter().zip(&runs[1]) {
        assert_eq!(first.x_range(), second.x_range());
        assert_eq!(first.y_range(), second.y_range());
        assert_eq!(first.x_label(), second.x_label());
        assert_eq!(first.y_label(), second.y_label());
        assert_eq!(first.data_point_count(), second.data_point_count());
    }
}

#[test]
fn test_figure_panels_share_one_image() {
    let mut figure = Figure::new(2, 1);
    figure.set_title("Sea state 1");
    plot_spectrum(&WaveData::from(spectrum_table()), figure.panel_mut(0, 0).unwrap()).unwrap();
    plot_chakrabarti(
        &WaveData::from(8),
        &WaveData::from(200),
        &WaveData::from(5),
        figure.panel_mut(1, 0).unwrap(),
    )
    .unwrap();

    assert_eq!(figure.shape(), (2, 1));
    assert_eq!(figure.panel(0, 0).unwrap().series().len(), 2);
    assert_eq!(figure.panel(1, 0).unwrap().markers().len(), 1);
    assert!(figure.set_panel(2, 0, Axes::new()).is_err());
}

#[test]
fn test_rejected_input_keeps_figure_panel() {
    let mut figure = Figure::new(1, 1);
    let mut panel = Axes::new();
    panel.plot(vec![(0.1, 0.5), (1.0, 2.0)], "earlier");
    figure.set_panel(0, 0, panel.clone()).unwrap();

    let result = plot_chakrabarti(
        &WaveData::from(vec![8.0, 8.0]),
        &WaveData::from(vec![200.0]),
        &WaveData::from(vec![5.0, 15.0]),
        figure.panel_mut(0, 0).unwrap(),
    );
    assert!(matches!(result, Err(PlotError::ShapeMismatch(_))));
    assert_eq!(figure.panel(0, 0), Some(&panel));
}

// src/constants.rs

use plotters::style::colors::BLACK;
use plotters::style::RGBColor;

// Image dimensions for a single set of axes.
pub const PLOT_WIDTH: u32 = 1200;
pub const PLOT_HEIGHT: u32 = 900;

// Size of one panel when several axes are composed into a figure.
pub const PANEL_WIDTH: u32 = 800;
pub const PANEL_HEIGHT: u32 = 600;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_LEGEND_COMPACT: i32 = 9;
pub const FONT_SIZE_ANNOTATION: i32 = 12;
pub const FONT_SIZE_CELL_VALUE: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_BOUNDARY: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radius in pixels.
pub const MARKER_SIZE: u32 = 5;
pub const TICK_MARK_SIZE: i32 = 5;

// Dash length and gap for dashed boundary lines, in pixels.
pub const DASH_SIZE_PX: u32 = 8;
pub const DASH_SPACING_PX: u32 = 5;

// Default series colors, cycled in the order lines and markers are added.
pub const SERIES_COLOR_CYCLE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub const COLOR_BOUNDARY: RGBColor = RGBColor(0, 0, 0);
pub const COLOR_CELL_TEXT: &RGBColor = &BLACK;

// --- Colorbar ---
pub const COLORBAR_WIDTH: u32 = 110;
pub const COLORBAR_STEPS: usize = 100;

// --- Chakrabarti regime chart ---
// Deep water breaking limit, H / lambda_w.
pub const BREAKING_STEEPNESS: f64 = 0.14;
// KC thresholds bounding the drag, inertia & drag and large inertia regimes.
pub const DRAG_UPPER_BOUND: f64 = 20.0;
pub const INERTIA_DRAG_UPPER_BOUND: f64 = 1.5;
pub const NEGLIGIBLE_DRAG_UPPER_BOUND: f64 = 0.25;
// Diffraction parameter above which diffraction dominates.
pub const DIFFRACTION_BOUND: f64 = 0.5;
// Boundary curves are sampled on this many log-spaced points over the x limits.
pub const CHAKRABARTI_SAMPLES: usize = 1000;
pub const CHAKRABARTI_X_LIMITS: (f64, f64) = (0.01, 10.0);
pub const CHAKRABARTI_Y_LIMITS: (f64, f64) = (0.01, 50.0);
pub const CHAKRABARTI_LEGEND_COLUMNS: usize = 2;

// --- Axis labels ---
pub const LABEL_OMEGA: &str = "omega [rad/s]";
pub const LABEL_SPECTRAL_DENSITY: &str = "Spectral density [m^2 s/rad]";
pub const LABEL_TIME: &str = "Time";
pub const LABEL_ELEVATION: &str = "eta [m]";
pub const LABEL_DIFFRACTION_PARAMETER: &str = "Diffraction parameter, pi D / lambda_w";
pub const LABEL_KC_PARAMETER: &str = "KC parameter, H / D";

// Default matrix axis labels: energy period on x, significant wave height on y.
pub const DEFAULT_MATRIX_X_LABEL: &str = "Te";
pub const DEFAULT_MATRIX_Y_LABEL: &str = "Hm0";

// Tick label format for datetime-indexed series.
pub const DATETIME_TICK_FORMAT: &str = "%H:%M:%S";
// Used when the visible time range crosses midnight.
pub const DATETIME_TICK_FORMAT_WITH_DATE: &str = "%Y-%m-%d %H:%M";

// src/constants.rs

// src/plot_functions/plot_chakrabarti.rs

use std::f64::consts::PI;

use log::debug;

use crate::constants::{
    BREAKING_STEEPNESS, CHAKRABARTI_LEGEND_COLUMNS, CHAKRABARTI_SAMPLES, CHAKRABARTI_X_LIMITS,
    CHAKRABARTI_Y_LIMITS, COLOR_BOUNDARY, DIFFRACTION_BOUND, DRAG_UPPER_BOUND,
    FONT_SIZE_ANNOTATION, FONT_SIZE_LEGEND_COMPACT, INERTIA_DRAG_UPPER_BOUND,
    LABEL_DIFFRACTION_PARAMETER, LABEL_KC_PARAMETER, LINE_WIDTH_BOUNDARY,
    NEGLIGIBLE_DRAG_UPPER_BOUND,
};
use crate::data_input::wave_data::WaveData;
use crate::error::PlotError;
use crate::plot_framework::{Annotation, AxisScale, Axes, LegendConfig, LineStyle, TextAnchor};
use crate::plotting_utils::{format_general, logspace};

/// Region names and where they are written, in chart coordinates.
const REGION_LABELS: [(&str, f64, f64); 6] = [
    ("drag", 0.0125, 30.0),
    ("inertia\n& drag", 0.02, 7.0),
    ("large\ninertia", 8e-2, 0.7),
    ("all\ninertia", 8e-2, 6e-2),
    ("diffraction", 2.0, 6e-2),
    ("wave\nbreaking\nH/lambda_w > 0.14", 1.0, 7.0),
];

/// One sample: wave height H [m], wavelength lambda_w [m] and
/// characteristic length D [m].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChakrabartiPoint {
    pub h: f64,
    pub lambda_w: f64,
    pub d: f64,
}

impl ChakrabartiPoint {
    /// Chart position: (H / D, pi D / lambda_w).
    pub fn chart_position(&self) -> (f64, f64) {
        (self.h / self.d, PI * self.d / self.lambda_w)
    }

    fn label(&self) -> String {
        format!(
            "H = {}, lambda_w = {}, D = {}",
            format_general(self.h, 2),
            format_general(self.lambda_w, 2),
            format_general(self.d, 2)
        )
    }
}

/// Aligns H, lambda_w and D into samples.
///
/// Scalars become single samples. When any input is an array or series, all
/// three must have the same shape once singleton dimensions are dropped.
pub fn resolve_samples(
    h: &WaveData,
    lambda_w: &WaveData,
    d: &WaveData,
) -> Result<Vec<ChakrabartiPoint>, PlotError> {
    let inputs = [("H", h), ("lambda_w", lambda_w), ("D", d)];

    let mut shapes = Vec::with_capacity(inputs.len());
    for (name, input) in inputs {
        shapes.push(input.squeezed_shape(name)?);
    }

    if inputs.iter().any(|(_, input)| input.is_collection())
        && !shapes.iter().all(|shape| *shape == shapes[0])
    {
        return Err(PlotError::ShapeMismatch(format!(
            "H, lambda_w, and D must be same shape (got {:?}, {:?}, {:?})",
            shapes[0], shapes[1], shapes[2]
        )));
    }

    let hs = h.flat_values("H")?;
    let lambdas = lambda_w.flat_values("lambda_w")?;
    let ds = d.flat_values("D")?;

    Ok(hs
        .into_iter()
        .zip(lambdas)
        .zip(ds)
        .map(|((h, lambda_w), d)| ChakrabartiPoint { h, lambda_w, d })
        .collect())
}

/// Plots, in the style of Chakrabarti (2005), the relative importance of
/// viscous drag, inertia and diffraction for each (H, lambda_w, D) sample.
///
/// Chakrabarti, Subrata. Handbook of Offshore Engineering. Elsevier, 2005.
pub fn plot_chakrabarti(
    h: &WaveData,
    lambda_w: &WaveData,
    d: &WaveData,
    ax: &mut Axes,
) -> Result<(), PlotError> {
    let samples = resolve_samples(h, lambda_w, d)?;

    ax.set_x_scale(AxisScale::Log);
    ax.set_y_scale(AxisScale::Log);

    draw_regime_boundaries(ax);

    for sample in &samples {
        ax.scatter_point(sample.chart_position(), sample.label());
    }

    if samples.len() > 1 {
        ax.enable_legend(LegendConfig {
            columns: CHAKRABARTI_LEGEND_COLUMNS,
            font_size: FONT_SIZE_LEGEND_COMPACT,
        });
    }

    ax.set_xlim(CHAKRABARTI_X_LIMITS.0, CHAKRABARTI_X_LIMITS.1);
    ax.set_ylim(CHAKRABARTI_Y_LIMITS.0, CHAKRABARTI_Y_LIMITS.1);
    ax.set_x_label(LABEL_DIFFRACTION_PARAMETER);
    ax.set_y_label(LABEL_KC_PARAMETER);

    debug!("plot_chakrabarti: {} samples", samples.len());
    Ok(())
}

fn draw_regime_boundaries(ax: &mut Axes) {
    let x = logspace(
        CHAKRABARTI_X_LIMITS.0.log10(),
        CHAKRABARTI_X_LIMITS.1.log10(),
        CHAKRABARTI_SAMPLES,
    );
    // x * y along the deep water breaking limit
    let breaking = BREAKING_STEEPNESS * PI;

    // Upper bounds of the drag, small drag and negligible drag regions
    for level in [
        DRAG_UPPER_BOUND,
        INERTIA_DRAG_UPPER_BOUND,
        NEGLIGIBLE_DRAG_UPPER_BOUND,
    ] {
        let data = x
            .iter()
            .filter(|&&v| v < breaking / level)
            .map(|&v| (v, level))
            .collect();
        ax.plot_styled(data, "", COLOR_BOUNDARY, LINE_WIDTH_BOUNDARY, LineStyle::Dashed);
    }

    // Left bound of the diffraction region
    ax.plot_styled(
        vec![
            (DIFFRACTION_BOUND, CHAKRABARTI_Y_LIMITS.0),
            (DIFFRACTION_BOUND, breaking / DIFFRACTION_BOUND),
        ],
        "",
        COLOR_BOUNDARY,
        LINE_WIDTH_BOUNDARY,
        LineStyle::Dashed,
    );

    ax.plot_styled(
        x.iter().map(|&v| (v, breaking / v)).collect(),
        "",
        COLOR_BOUNDARY,
        LINE_WIDTH_BOUNDARY,
        LineStyle::Solid,
    );

    for (text, x, y) in REGION_LABELS {
        ax.annotate(Annotation {
            text: text.to_string(),
            position: (x, y),
            font_size: FONT_SIZE_ANNOTATION,
            italic: true,
            anchor: TextAnchor::TopCenter,
            color: COLOR_BOUNDARY,
        });
    }
}

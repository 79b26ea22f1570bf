// src/plot_framework.rs

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use chrono::{Duration, NaiveDateTime};
use log::info;
use ndarray::Array2;
use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, ChartContext, LabelAreaPosition, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::combinators::IntoLogRange;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, EmptyElement, PathElement, Rectangle, Text};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, FontStyle, IntoFont, RGBColor, TextStyle};

use crate::constants::{
    COLORBAR_STEPS, COLORBAR_WIDTH, DASH_SIZE_PX, DASH_SPACING_PX, DATETIME_TICK_FORMAT,
    DATETIME_TICK_FORMAT_WITH_DATE, FONT_SIZE_LEGEND, LINE_WIDTH_LEGEND, LINE_WIDTH_PLOT,
    MARKER_SIZE, PANEL_HEIGHT, PANEL_WIDTH, PLOT_HEIGHT, PLOT_WIDTH, SERIES_COLOR_CYCLE,
    TICK_MARK_SIZE,
};
use crate::error::PlotError;
use crate::font_config::{
    FONT_FAMILY_SYSTEM, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};
use crate::plotting_utils::{
    calculate_log_range, calculate_range, format_tick_value, map_value_to_color,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Where a text annotation sits relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    TopCenter,
}

impl TextAnchor {
    fn pos(self) -> Pos {
        match self {
            TextAnchor::Center => Pos::new(HPos::Center, VPos::Center),
            TextAnchor::TopCenter => Pos::new(HPos::Center, VPos::Top),
        }
    }
}

/// How x tick values are turned into text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickFormat {
    Numeric,
    /// x values are seconds elapsed since the given timestamp.
    ElapsedSince(NaiveDateTime),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    pub position: (f64, f64),
    pub label: String,
    pub color: RGBColor,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub position: (f64, f64),
    pub font_size: i32,
    pub italic: bool,
    pub anchor: TextAnchor,
    pub color: RGBColor,
}

/// Image-style grid: cell (row, col) is centred at (col, row), row 0 at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGrid {
    pub values: Array2<f64>,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Colorbar {
    pub min: f64,
    pub max: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendConfig {
    pub columns: usize,
    pub font_size: i32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            font_size: FONT_SIZE_LEGEND,
        }
    }
}

/// A drawing surface.
///
/// Plotting functions record lines, markers, text and images here; nothing
/// is rasterised until [`Axes::save_png`], [`Axes::save_svg`] or
/// [`Axes::draw_on`] is called. A fresh surface comes from [`Axes::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    title: Option<String>,
    x_label: String,
    y_label: String,
    x_limits: Option<Range<f64>>,
    y_limits: Option<Range<f64>>,
    x_scale: AxisScale,
    y_scale: AxisScale,
    x_tick_format: TickFormat,
    x_ticks: Option<Vec<(f64, String)>>,
    y_ticks: Option<Vec<(f64, String)>>,
    series: Vec<PlotSeries>,
    markers: Vec<PointMarker>,
    annotations: Vec<Annotation>,
    image: Option<ImageGrid>,
    colorbar: Option<Colorbar>,
    legend: Option<LegendConfig>,
    next_color: usize,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes {
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: String::new(),
            y_label: String::new(),
            x_limits: None,
            y_limits: None,
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            x_tick_format: TickFormat::Numeric,
            x_ticks: None,
            y_ticks: None,
            series: Vec::new(),
            markers: Vec::new(),
            annotations: Vec::new(),
            image: None,
            colorbar: None,
            legend: None,
            next_color: 0,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = label.into();
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.x_limits = Some(min..max);
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.y_limits = Some(min..max);
    }

    pub fn x_scale(&self) -> AxisScale {
        self.x_scale
    }

    pub fn y_scale(&self) -> AxisScale {
        self.y_scale
    }

    pub fn set_x_scale(&mut self, scale: AxisScale) {
        self.x_scale = scale;
    }

    pub fn set_y_scale(&mut self, scale: AxisScale) {
        self.y_scale = scale;
    }

    pub fn x_tick_format(&self) -> TickFormat {
        self.x_tick_format
    }

    pub fn set_x_tick_format(&mut self, format: TickFormat) {
        self.x_tick_format = format;
    }

    pub fn x_ticks(&self) -> Option<&[(f64, String)]> {
        self.x_ticks.as_deref()
    }

    pub fn y_ticks(&self) -> Option<&[(f64, String)]> {
        self.y_ticks.as_deref()
    }

    /// Replace the automatic x tick labels with fixed positions and text.
    pub fn set_x_ticks(&mut self, ticks: Vec<(f64, String)>) {
        self.x_ticks = Some(ticks);
    }

    pub fn set_y_ticks(&mut self, ticks: Vec<(f64, String)>) {
        self.y_ticks = Some(ticks);
    }

    pub fn series(&self) -> &[PlotSeries] {
        &self.series
    }

    pub fn markers(&self) -> &[PointMarker] {
        &self.markers
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn image(&self) -> Option<&ImageGrid> {
        self.image.as_ref()
    }

    pub fn colorbar(&self) -> Option<&Colorbar> {
        self.colorbar.as_ref()
    }

    pub fn legend(&self) -> Option<LegendConfig> {
        self.legend
    }

    /// Next color of the default cycle. Every line or marker added without an
    /// explicit color advances the cycle.
    pub fn next_color(&mut self) -> RGBColor {
        let color = SERIES_COLOR_CYCLE[self.next_color % SERIES_COLOR_CYCLE.len()];
        self.next_color += 1;
        color
    }

    /// Add a solid line in the next cycle color.
    pub fn plot(&mut self, data: Vec<(f64, f64)>, label: impl Into<String>) {
        let color = self.next_color();
        self.plot_styled(data, label, color, LINE_WIDTH_PLOT, LineStyle::Solid);
    }

    pub fn plot_styled(
        &mut self,
        data: Vec<(f64, f64)>,
        label: impl Into<String>,
        color: RGBColor,
        stroke_width: u32,
        style: LineStyle,
    ) {
        self.series.push(PlotSeries {
            data,
            label: label.into(),
            color,
            stroke_width,
            style,
        });
    }

    /// Add a single point marker in the next cycle color.
    pub fn scatter_point(&mut self, position: (f64, f64), label: impl Into<String>) {
        let color = self.next_color();
        self.markers.push(PointMarker {
            position,
            label: label.into(),
            color,
            size: MARKER_SIZE,
        });
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn set_image(&mut self, image: ImageGrid) {
        self.image = Some(image);
    }

    pub fn set_colorbar(&mut self, colorbar: Colorbar) {
        self.colorbar = Some(colorbar);
    }

    pub fn enable_legend(&mut self, config: LegendConfig) {
        self.legend = Some(config);
    }

    /// Number of plotted data items: line vertices, markers and image cells.
    pub fn data_point_count(&self) -> usize {
        let line_points: usize = self.series.iter().map(|s| s.data.len()).sum();
        let cells = self.image.as_ref().map_or(0, |g| g.values.len());
        line_points + self.markers.len() + cells
    }

    /// Effective x limits: the fixed limits if set, otherwise derived from the data.
    pub fn x_range(&self) -> Range<f64> {
        match &self.x_limits {
            Some(limits) => limits.clone(),
            None => self.auto_range(
                |p| p.0,
                self.x_scale,
                self.image.as_ref().map(|g| g.values.ncols()),
            ),
        }
    }

    pub fn y_range(&self) -> Range<f64> {
        match &self.y_limits {
            Some(limits) => limits.clone(),
            None => self.auto_range(
                |p| p.1,
                self.y_scale,
                self.image.as_ref().map(|g| g.values.nrows()),
            ),
        }
    }

    fn auto_range<F>(&self, coord: F, scale: AxisScale, image_cells: Option<usize>) -> Range<f64>
    where
        F: Fn(&(f64, f64)) -> f64,
    {
        if let Some(n) = image_cells {
            return -0.5..(n as f64 - 0.5);
        }
        let values = self
            .series
            .iter()
            .flat_map(|s| s.data.iter())
            .chain(self.markers.iter().map(|m| &m.position))
            .map(coord)
            .filter(|v| v.is_finite())
            .filter(|v| scale == AxisScale::Linear || *v > 0.0);
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        // No usable data
        if min > max {
            return match scale {
                AxisScale::Linear => 0.0..1.0,
                AxisScale::Log => 0.1..10.0,
            };
        }
        let (lo, hi) = match scale {
            AxisScale::Linear => calculate_range(min, max),
            AxisScale::Log => calculate_log_range(min, max),
        };
        lo..hi
    }

    /// Tick text for x value `v`. `range` is the visible x range; timestamp
    /// ticks include the date when that range crosses midnight.
    fn format_x_tick(&self, v: f64, range: &Range<f64>) -> String {
        if self.x_ticks.is_some() {
            return String::new();
        }
        match self.x_tick_format {
            TickFormat::Numeric => format_tick_value(v),
            TickFormat::ElapsedSince(origin) => {
                let at = |seconds: f64| {
                    origin + Duration::milliseconds((seconds * 1000.0).round() as i64)
                };
                let format = if at(range.start).date() == at(range.end).date() {
                    DATETIME_TICK_FORMAT
                } else {
                    DATETIME_TICK_FORMAT_WITH_DATE
                };
                at(v).format(format).to_string()
            }
        }
    }

    fn format_y_tick(&self, v: f64) -> String {
        if self.y_ticks.is_some() {
            String::new()
        } else {
            format_tick_value(v)
        }
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let path = path.as_ref();
        let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        present(&root, self.draw_on(&root))?;
        info!("Plot saved as '{}'.", path.display());
        Ok(())
    }

    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let path = path.as_ref();
        let root = SVGBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        present(&root, self.draw_on(&root))?;
        info!("Plot saved as '{}'.", path.display());
        Ok(())
    }

    /// Draws the recorded content onto any plotters drawing area.
    pub fn draw_on<DB>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        area.fill(&WHITE)?;

        let (plot_area, colorbar_area) = match &self.colorbar {
            Some(_) => {
                let width = area.dim_in_pixel().0;
                let (left, right) =
                    area.split_horizontally(width.saturating_sub(COLORBAR_WIDTH));
                (left, Some(right))
            }
            None => (area.clone(), None),
        };

        let x_range = self.x_range();
        let y_range = self.y_range();

        let mut builder = ChartBuilder::on(&plot_area);
        builder
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(70);
        if let Some(title) = &self.title {
            builder.caption(title, FONT_TUPLE_CHART_TITLE);
        }

        match (self.x_scale, self.y_scale) {
            (AxisScale::Linear, AxisScale::Linear) => {
                let mut chart = builder.build_cartesian_2d(x_range.clone(), y_range.clone())?;
                self.draw_chart(&plot_area, &mut chart, &x_range, &y_range)?;
            }
            (AxisScale::Log, AxisScale::Linear) => {
                let mut chart =
                    builder.build_cartesian_2d(x_range.clone().log_scale(), y_range.clone())?;
                self.draw_chart(&plot_area, &mut chart, &x_range, &y_range)?;
            }
            (AxisScale::Linear, AxisScale::Log) => {
                let mut chart =
                    builder.build_cartesian_2d(x_range.clone(), y_range.clone().log_scale())?;
                self.draw_chart(&plot_area, &mut chart, &x_range, &y_range)?;
            }
            (AxisScale::Log, AxisScale::Log) => {
                let mut chart = builder.build_cartesian_2d(
                    x_range.clone().log_scale(),
                    y_range.clone().log_scale(),
                )?;
                self.draw_chart(&plot_area, &mut chart, &x_range, &y_range)?;
            }
        }

        if let (Some(colorbar), Some(bar_area)) = (&self.colorbar, colorbar_area) {
            draw_colorbar(&bar_area, colorbar)?;
        }
        Ok(())
    }

    fn draw_chart<'a, DB, X, Y>(
        &self,
        area: &DrawingArea<DB, Shift>,
        chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
        x_range: &Range<f64>,
        y_range: &Range<f64>,
    ) -> Result<(), Box<dyn Error>>
    where
        DB: DrawingBackend + 'a,
        DB::ErrorType: 'static,
        X: Ranged<ValueType = f64> + ValueFormatter<f64>,
        Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        let x_formatter = |v: &f64| self.format_x_tick(*v, x_range);
        let y_formatter = |v: &f64| self.format_y_tick(*v);
        {
            let mut mesh = chart.configure_mesh();
            mesh.x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .x_labels(10)
                .y_labels(10)
                .x_label_formatter(&x_formatter)
                .y_label_formatter(&y_formatter)
                .light_line_style(WHITE.mix(0.7))
                .label_style(FONT_TUPLE_AXIS_LABEL);
            // Axes with fixed ticks get their marks drawn at the fixed positions below
            if self.x_ticks.is_some() {
                mesh.set_tick_mark_size(LabelAreaPosition::Bottom, 0);
            }
            if self.y_ticks.is_some() {
                mesh.set_tick_mark_size(LabelAreaPosition::Left, 0);
            }
            mesh.draw()?;
        }

        // Image first so lines, markers and text appear on top
        if let Some(grid) = &self.image {
            for ((row, col), &value) in grid.values.indexed_iter() {
                if !value.is_finite() {
                    continue;
                }
                let color = map_value_to_color(value, grid.min, grid.max);
                let (x, y) = (col as f64, row as f64);
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                    color.filled(),
                )))?;
            }
        }

        let builtin_legend = matches!(self.legend, Some(cfg) if cfg.columns <= 1);

        for s in &self.series {
            if s.data.is_empty() {
                continue;
            }
            let style = s.color.stroke_width(s.stroke_width);
            let anno = match s.style {
                LineStyle::Solid => {
                    chart.draw_series(LineSeries::new(s.data.iter().copied(), style))?
                }
                LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(
                    s.data.iter().copied(),
                    DASH_SIZE_PX,
                    DASH_SPACING_PX,
                    style,
                ))?,
            };
            if builtin_legend && !s.label.is_empty() {
                let color = s.color;
                anno.label(s.label.as_str()).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
            }
        }

        for m in &self.markers {
            let anno = chart.draw_series(std::iter::once(Circle::new(
                m.position,
                m.size,
                m.color.filled(),
            )))?;
            if builtin_legend && !m.label.is_empty() {
                let (color, size) = (m.color, m.size);
                anno.label(m.label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 10, y), size, color.filled()));
            }
        }

        for a in &self.annotations {
            let font = (FONT_FAMILY_SYSTEM, a.font_size).into_font();
            let font = if a.italic {
                font.style(FontStyle::Italic)
            } else {
                font
            };
            let style = TextStyle::from(font).color(&a.color).pos(a.anchor.pos());
            let line_height = a.font_size + 2;
            let n_lines = a.text.lines().count() as i32;
            let first_offset = match a.anchor {
                TextAnchor::Center => -((n_lines - 1) * line_height) / 2,
                TextAnchor::TopCenter => 0,
            };
            for (i, line) in a.text.lines().enumerate() {
                let dy = first_offset + i as i32 * line_height;
                chart.draw_series(std::iter::once(
                    EmptyElement::at(a.position)
                        + Text::new(line.to_string(), (0, dy), style.clone()),
                ))?;
            }
        }

        // Fixed tick labels are placed in pixel space, relative to this area
        let base = area.get_base_pixel();
        let tick_style = TextStyle::from(FONT_TUPLE_AXIS_LABEL.into_font()).color(&BLACK);
        if let Some(ticks) = &self.x_ticks {
            for (pos, label) in ticks {
                let (x, y) = chart.backend_coord(&(*pos, y_range.start));
                let (px, py) = (x - base.0, y - base.1);
                area.draw(&PathElement::new(
                    vec![(px, py), (px, py + TICK_MARK_SIZE)],
                    BLACK.stroke_width(1),
                ))?;
                area.draw(&Text::new(
                    label.clone(),
                    (px, py + 8),
                    tick_style.pos(Pos::new(HPos::Center, VPos::Top)),
                ))?;
            }
        }
        if let Some(ticks) = &self.y_ticks {
            for (pos, label) in ticks {
                let (x, y) = chart.backend_coord(&(x_range.start, *pos));
                let (px, py) = (x - base.0, y - base.1);
                area.draw(&PathElement::new(
                    vec![(px - TICK_MARK_SIZE, py), (px, py)],
                    BLACK.stroke_width(1),
                ))?;
                area.draw(&Text::new(
                    label.clone(),
                    (px - 8, py),
                    tick_style.pos(Pos::new(HPos::Right, VPos::Center)),
                ))?;
            }
        }

        match self.legend {
            Some(cfg) if cfg.columns <= 1 => {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperRight)
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .label_font((FONT_FAMILY_SYSTEM, cfg.font_size))
                    .draw()?;
            }
            Some(cfg) => {
                let (px_x, px_y) = chart.plotting_area().get_pixel_range();
                self.draw_column_legend(area, cfg, (px_x.end - base.0, px_y.start - base.1))?;
            }
            None => {}
        }

        Ok(())
    }

    /// Legend laid out in `cfg.columns` columns, anchored at the upper right
    /// corner (`anchor`, area pixels) of the plotting region.
    fn draw_column_legend<DB>(
        &self,
        area: &DrawingArea<DB, Shift>,
        cfg: LegendConfig,
        anchor: (i32, i32),
    ) -> Result<(), Box<dyn Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let entries: Vec<(RGBColor, &str, bool)> = self
            .series
            .iter()
            .filter(|s| !s.label.is_empty())
            .map(|s| (s.color, s.label.as_str(), false))
            .chain(
                self.markers
                    .iter()
                    .filter(|m| !m.label.is_empty())
                    .map(|m| (m.color, m.label.as_str(), true)),
            )
            .collect();
        if entries.is_empty() {
            return Ok(());
        }

        // Approximate character width relative to font size
        const CHAR_WIDTH_RATIO: f32 = 0.6;
        const SWATCH_WIDTH: i32 = 16;
        const PADDING: i32 = 6;

        let columns = cfg.columns.clamp(1, entries.len());
        let rows = entries.len().div_ceil(columns) as i32;
        let longest = entries
            .iter()
            .map(|(_, label, _)| label.chars().count())
            .max()
            .unwrap_or(0) as i32;
        let char_width = (cfg.font_size as f32 * CHAR_WIDTH_RATIO) as i32;
        let column_width = SWATCH_WIDTH + 2 * PADDING + longest * char_width;
        let row_height = cfg.font_size + 4;

        let right = anchor.0 - 10;
        let top = anchor.1 + 10;
        let left = right - column_width * columns as i32 - PADDING;
        let bottom = top + rows * row_height + 2 * PADDING;

        area.draw(&Rectangle::new(
            [(left, top), (right, bottom)],
            WHITE.mix(0.8).filled(),
        ))?;
        area.draw(&Rectangle::new(
            [(left, top), (right, bottom)],
            BLACK.stroke_width(1),
        ))?;

        let text_style = TextStyle::from((FONT_FAMILY_SYSTEM, cfg.font_size).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));
        for (k, (color, label, is_marker)) in entries.iter().enumerate() {
            let col = (k % columns) as i32;
            let row = (k / columns) as i32;
            let x = left + PADDING + col * column_width;
            let y = top + PADDING + row * row_height + row_height / 2;
            if *is_marker {
                area.draw(&Circle::new((x + SWATCH_WIDTH / 2, y), 3, color.filled()))?;
            } else {
                area.draw(&PathElement::new(
                    vec![(x, y), (x + SWATCH_WIDTH, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                ))?;
            }
            area.draw(&Text::new(
                label.to_string(),
                (x + SWATCH_WIDTH + PADDING, y),
                text_style.clone(),
            ))?;
        }
        Ok(())
    }
}

fn draw_colorbar<DB>(
    area: &DrawingArea<DB, Shift>,
    colorbar: &Colorbar,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (lo, hi) = if colorbar.max > colorbar.min {
        (colorbar.min, colorbar.max)
    } else {
        calculate_range(colorbar.min, colorbar.max)
    };

    let mut bar = ChartBuilder::on(area)
        .margin_top(10)
        .margin_bottom(70)
        .set_label_area_size(LabelAreaPosition::Left, 0)
        .set_label_area_size(LabelAreaPosition::Bottom, 0)
        .set_label_area_size(LabelAreaPosition::Right, 80)
        .build_cartesian_2d(0.0..1.0, lo..hi)?;

    let step = (hi - lo) / COLORBAR_STEPS as f64;
    for i in 0..COLORBAR_STEPS {
        let v0 = lo + step * i as f64;
        let color = map_value_to_color(v0 + step * 0.5, lo, hi);
        bar.draw_series(std::iter::once(Rectangle::new(
            [(0.0, v0), (1.0, v0 + step)],
            color.filled(),
        )))?;
    }

    let tick_formatter = |v: &f64| format_tick_value(*v);
    bar.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(7)
        .y_label_formatter(&tick_formatter)
        .y_desc(colorbar.label.clone().unwrap_or_default())
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;
    Ok(())
}

/// Draw a placeholder message on an area with nothing to plot.
pub fn draw_unavailable_message<DB>(
    area: &DrawingArea<DB, Shift>,
    reason: &str,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (width, height) = area.dim_in_pixel();
    let text_style = TextStyle::from(FONT_TUPLE_MESSAGE.into_font())
        .color(&RED)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        format!("Data Unavailable: {reason}"),
        (width as i32 / 2, height as i32 / 2),
        text_style,
    ))?;
    Ok(())
}

fn present<DB>(
    root: &DrawingArea<DB, Shift>,
    drawn: Result<(), Box<dyn Error>>,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    drawn
        .and_then(|()| root.present().map_err(|e| -> Box<dyn Error> { Box::new(e) }))
        .map_err(|e| PlotError::Render(e.to_string()))
}

/// Several surfaces composed into one image, laid out on a grid.
#[derive(Debug, Clone)]
pub struct Figure {
    rows: usize,
    cols: usize,
    title: Option<String>,
    panels: Vec<Option<Axes>>,
}

impl Figure {
    pub fn new(rows: usize, cols: usize) -> Self {
        let (rows, cols) = (rows.max(1), cols.max(1));
        Self {
            rows,
            cols,
            title: None,
            panels: vec![None; rows * cols],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    fn slot(&self, row: usize, col: usize) -> Result<usize, PlotError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(PlotError::ShapeMismatch(format!(
                "panel ({row}, {col}) is outside a {}x{} figure",
                self.rows, self.cols
            )))
        }
    }

    pub fn set_panel(&mut self, row: usize, col: usize, axes: Axes) -> Result<(), PlotError> {
        let slot = self.slot(row, col)?;
        self.panels[slot] = Some(axes);
        Ok(())
    }

    pub fn panel(&self, row: usize, col: usize) -> Option<&Axes> {
        self.slot(row, col)
            .ok()
            .and_then(|slot| self.panels[slot].as_ref())
    }

    /// Surface of a panel for a plotting function to draw on. An empty panel
    /// gets a fresh [`Axes::new`].
    pub fn panel_mut(&mut self, row: usize, col: usize) -> Result<&mut Axes, PlotError> {
        let slot = self.slot(row, col)?;
        Ok(self.panels[slot].get_or_insert_with(Axes::new))
    }

    fn size(&self) -> (u32, u32) {
        (
            PANEL_WIDTH * self.cols as u32,
            PANEL_HEIGHT * self.rows as u32,
        )
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let path = path.as_ref();
        let root = BitMapBackend::new(path, self.size()).into_drawing_area();
        present(&root, self.draw_on(&root))?;
        info!("Figure saved as '{}'.", path.display());
        Ok(())
    }

    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let path = path.as_ref();
        let root = SVGBackend::new(path, self.size()).into_drawing_area();
        present(&root, self.draw_on(&root))?;
        info!("Figure saved as '{}'.", path.display());
        Ok(())
    }

    pub fn draw_on<DB>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let grid_area = match &self.title {
            Some(title) => {
                root.draw(&Text::new(
                    title.clone(),
                    (10, 10),
                    FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
                ))?;
                root.margin(50, 5, 5, 5)
            }
            None => root.clone(),
        };
        let areas = grid_area.split_evenly((self.rows, self.cols));
        for (area, panel) in areas.iter().zip(&self.panels) {
            match panel {
                Some(axes) => axes.draw_on(area)?,
                None => draw_unavailable_message(area, "Empty panel")?,
            }
        }
        Ok(())
    }
}

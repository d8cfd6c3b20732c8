// File: src/services/report/chart.rs
use crate::env_config::models::app_config::ChartConfig;
use crate::error::AppError;
use crate::pool_api::models::dashboard::Statistic;
use crate::utils::units::to_display_hashrate;
use chrono::{DateTime, Duration, Utc};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::register_font;
use std::io::Cursor;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::debug;

pub const CURRENT_SERIES: &str = "Current Hashrate";
pub const REPORTED_SERIES: &str = "Reported Hashrate";

const X_AXIS_NAME: &str = "Time";
const Y_AXIS_NAME: &str = "MH/S";
const TIME_LABEL_FORMAT: &str = "%d %H:%M";
const FONT_FAMILY: &str = "DejaVu Sans";
const FONT_BYTES: &[u8] = include_bytes!("../../../fonts/DejaVuSans.ttf");

static FONT_REGISTRATION: OnceLock<Result<(), String>> = OnceLock::new();

/// One named line of (time, MH/s) points
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub points: Vec<(DateTime<Utc>, f64)>,
}

/// PNG-encoded chart image
#[derive(Debug, Clone)]
pub struct RenderedChart {
    bytes: Vec<u8>,
}

impl RenderedChart {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Maps samples to the "current" and "reported" hashrate series, in input order.
pub fn build_series(samples: &[Statistic]) -> Vec<ChartSeries> {
    let mut current = ChartSeries {
        name: CURRENT_SERIES,
        points: Vec::with_capacity(samples.len()),
    };
    let mut reported = ChartSeries {
        name: REPORTED_SERIES,
        points: Vec::with_capacity(samples.len()),
    };

    for sample in samples {
        let time = DateTime::<Utc>::from_timestamp(sample.time, 0).unwrap_or_default();
        current
            .points
            .push((time, to_display_hashrate(sample.current_hashrate)));
        reported
            .points
            .push((time, to_display_hashrate(sample.reported_hashrate)));
    }

    vec![current, reported]
}

/// Builds the series from `samples` and renders them.
pub fn render_hashrate_chart(
    samples: &[Statistic],
    config: &ChartConfig,
) -> Result<RenderedChart, AppError> {
    render_png(&build_series(samples), config)
}

/// Draws the series on a dark canvas and encodes the result as PNG.
pub fn render_png(series: &[ChartSeries], config: &ChartConfig) -> Result<RenderedChart, AppError> {
    register_embedded_font()?;
    let background = parse_hex_color(&config.background_color)?;
    let foreground = parse_hex_color(&config.foreground_color)?;
    let (width, height) = (config.width, config.height);

    let x_range = time_range(series);
    let y_range = value_range(series);
    debug!(
        "Rendering {}x{} chart, {} series, x {:?}, y {:?}",
        width,
        height,
        series.len(),
        x_range,
        y_range
    );

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&background).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_error)?;

        let label_style = (FONT_FAMILY, 12).into_font().color(&foreground);
        chart
            .configure_mesh()
            .disable_mesh()
            .axis_style(foreground)
            .label_style(label_style.clone())
            .axis_desc_style(label_style.clone())
            .x_desc(X_AXIS_NAME)
            .y_desc(Y_AXIS_NAME)
            .x_labels(6)
            .y_labels(5)
            .x_label_formatter(&|time: &DateTime<Utc>| time.format(TIME_LABEL_FORMAT).to_string())
            .draw()
            .map_err(render_error)?;

        for line in series {
            let color = series_color(line.name, config)?;
            chart
                .draw_series(LineSeries::new(
                    line.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(render_error)?
                .label(line.name)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(background)
            .border_style(foreground)
            .label_font(label_style)
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }

    encode_png(buffer, width, height)
}

/// Makes the bundled font available to plotters under `FONT_FAMILY`.
/// Labels never depend on fonts installed on the host.
fn register_embedded_font() -> Result<(), AppError> {
    FONT_REGISTRATION
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| format!("Embedded font {FONT_FAMILY} is not a valid TrueType file"))
        })
        .clone()
        .map_err(AppError::Render)
}

fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<RenderedChart, AppError> {
    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| AppError::Render("Pixel buffer does not match chart size".to_string()))?;

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(render_error)?;

    Ok(RenderedChart { bytes })
}

fn series_color(name: &str, config: &ChartConfig) -> Result<RGBColor, AppError> {
    if name == REPORTED_SERIES {
        parse_hex_color(&config.reported_color)
    } else {
        parse_hex_color(&config.current_color)
    }
}

// Empty input gets a one-hour window at the epoch; a single instant is padded by half an hour.
fn time_range(series: &[ChartSeries]) -> Range<DateTime<Utc>> {
    let bounds = series
        .iter()
        .flat_map(|line| line.points.iter().map(|(time, _)| *time))
        .fold(None, |acc: Option<(DateTime<Utc>, DateTime<Utc>)>, time| match acc {
            None => Some((time, time)),
            Some((lo, hi)) => Some((lo.min(time), hi.max(time))),
        });

    match bounds {
        Some((lo, hi)) if lo < hi => lo..hi,
        Some((lo, _)) => (lo - Duration::minutes(30))..(lo + Duration::minutes(30)),
        None => {
            let epoch = DateTime::<Utc>::default();
            epoch..(epoch + Duration::hours(1))
        }
    }
}

fn value_range(series: &[ChartSeries]) -> Range<f64> {
    let max = series
        .iter()
        .flat_map(|line| line.points.iter().map(|(_, value)| *value))
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    if max > 0.0 { 0.0..max * 1.1 } else { 0.0..1.0 }
}

/// Parses `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Result<RGBColor, AppError> {
    let hex = value.trim().trim_start_matches('#');
    let invalid = || AppError::Config(format!("Invalid hex color: {value}"));

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

fn render_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}

//! Line charts of yearly trend series, drawn beside each map frame.
//!
//! One panel per series, stacked top to bottom. Each panel plots the series
//! over the requested year range with a red vertical marker at the frame's
//! year and a dot on that year's value. Titles, axis labels and the
//! highlighted value are drawn in DejaVu Sans Mono.

use std::ops::RangeInclusive;

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;
use map_common::TrendSeries;
use rusttype::{Font, Scale};

use crate::canvas::{interpolate, interpolate_flipped};
use crate::gradient::Color;

const LINE_COLOR: Color = Color::new(31, 119, 180);
const MARKER_COLOR: Color = Color::new(255, 0, 0);
const TICK_LENGTH: f32 = 4.0;

const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");
const TITLE_SIZE: f32 = 14.0;
const LABEL_SIZE: f32 = 11.0;
const Y_LABEL: &str = "rate per 100,000 people";

/// Output size and panel margins, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin_left: 60,
            margin_right: 20,
            margin_top: 24,
            margin_bottom: 40,
        }
    }
}

/// Plot area of one panel.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn x(&self, year: i32, years: &RangeInclusive<i32>) -> f64 {
        if years.start() == years.end() {
            return self.left + self.width / 2.0;
        }
        self.left
            + interpolate(
                f64::from(year),
                f64::from(*years.start()),
                f64::from(*years.end()),
                self.width,
            )
    }

    fn y(&self, value: f64, lo: f64, hi: f64) -> f64 {
        self.top + interpolate_flipped(value, lo, hi, self.height)
    }
}

/// Render every series into one image.
///
/// An empty `series` slice yields a blank white image of the configured size.
pub fn render_trend_chart(
    series: &[TrendSeries],
    years: RangeInclusive<i32>,
    highlight_year: i32,
    config: &ChartConfig,
) -> RgbImage {
    let mut image = RgbImage::from_pixel(config.width, config.height, Color::WHITE.into());
    if series.is_empty() {
        return image;
    }

    let font = Font::try_from_bytes(FONT_DATA);
    if font.is_none() {
        tracing::warn!("Failed to load chart font, drawing without labels");
    }

    let panel_height = config.height / series.len() as u32;
    for (i, s) in series.iter().enumerate() {
        let area = PlotArea {
            left: f64::from(config.margin_left),
            top: f64::from(i as u32 * panel_height + config.margin_top),
            width: f64::from(config.width.saturating_sub(config.margin_left + config.margin_right)),
            height: f64::from(
                panel_height.saturating_sub(config.margin_top + config.margin_bottom),
            ),
        };
        if area.width < 1.0 || area.height < 1.0 {
            tracing::warn!(series = %s.name, "Chart panel too small to draw");
            continue;
        }
        draw_panel(&mut image, s, &area, &years, highlight_year);
        if let Some(font) = &font {
            draw_labels(&mut image, font, s, &area, &years, highlight_year);
        }
    }

    image
}

fn draw_panel(
    image: &mut RgbImage,
    series: &TrendSeries,
    area: &PlotArea,
    years: &RangeInclusive<i32>,
    highlight_year: i32,
) {
    let black = Rgb::from(Color::BLACK);

    draw_hollow_rect_mut(
        image,
        Rect::at(area.left as i32, area.top as i32).of_size(area.width as u32, area.height as u32),
        black,
    );

    let bottom = (area.top + area.height) as f32;
    for year in years.clone() {
        let x = area.x(year, years) as f32;
        draw_line_segment_mut(image, (x, bottom), (x, bottom + TICK_LENGTH), black);
    }

    let (lo, hi) = padded_range(series);
    let points: Vec<(f32, f32)> = series
        .points
        .iter()
        .filter(|(year, _)| years.contains(year))
        .map(|&(year, value)| (area.x(year, years) as f32, area.y(value, lo, hi) as f32))
        .collect();

    let line = Rgb::from(LINE_COLOR);
    for pair in points.windows(2) {
        draw_line_segment_mut(image, pair[0], pair[1], line);
    }

    let marker = Rgb::from(MARKER_COLOR);
    let x = area.x(highlight_year, years) as f32;
    draw_line_segment_mut(image, (x, area.top as f32), (x, bottom), marker);

    if let Some(value) = series.value_at(highlight_year) {
        let y = area.y(value, lo, hi);
        draw_filled_circle_mut(image, (x.round() as i32, y.round() as i32), 3, marker);
    }
}

/// Title, axis labels and the highlighted value for one panel.
fn draw_labels(
    image: &mut RgbImage,
    font: &Font<'_>,
    series: &TrendSeries,
    area: &PlotArea,
    years: &RangeInclusive<i32>,
    highlight_year: i32,
) {
    let black = Rgb::from(Color::BLACK);
    let title_scale = Scale::uniform(TITLE_SIZE);
    let label_scale = Scale::uniform(LABEL_SIZE);
    let center = area.left + area.width / 2.0;
    let bottom = area.top + area.height;

    let title = format!("{} in {}", series.name, highlight_year);
    let (w, h) = text_size(title_scale, font, &title);
    let y = (area.top as i32 - h - 4).max(0);
    draw_text_mut(image, black, center as i32 - w / 2, y, title_scale, font, &title);

    draw_text_mut(
        image,
        black,
        area.left as i32 + 4,
        area.top as i32 + 2,
        label_scale,
        font,
        Y_LABEL,
    );

    // First and last year under the axis, "Year" centred below them.
    let tick_y = (bottom + f64::from(TICK_LENGTH)) as i32 + 2;
    for year in [*years.start(), *years.end()] {
        let text = year.to_string();
        let (w, _) = text_size(label_scale, font, &text);
        let x = area.x(year, years) as i32 - w / 2;
        draw_text_mut(image, black, x, tick_y, label_scale, font, &text);
    }
    let (w, h) = text_size(label_scale, font, "Year");
    draw_text_mut(image, black, center as i32 - w / 2, tick_y + h + 3, label_scale, font, "Year");

    // Value scale at the top and bottom of the axis.
    let (lo, hi) = padded_range(series);
    for (value, y) in [(hi, area.top), (lo, bottom)] {
        let text = format!("{:.0}", value);
        let (w, h) = text_size(label_scale, font, &text);
        let x = (area.left as i32 - w - 4).max(0);
        draw_text_mut(image, black, x, y as i32 - h / 2, label_scale, font, &text);
    }

    if let Some(value) = series.value_at(highlight_year) {
        let x = area.x(highlight_year, years) as i32 + 6;
        let y = area.y(value, lo, hi) as i32 - LABEL_SIZE as i32 - 2;
        draw_text_mut(image, black, x, y, label_scale, font, &value.to_string());
    }
}

/// Value range with 5% headroom so the line never sits on the frame.
fn padded_range(series: &TrendSeries) -> (f64, f64) {
    match series.value_range() {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
    }
}

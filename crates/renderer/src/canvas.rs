//! Raster surface for one choropleth frame.
//!
//! A canvas covers the frame's bounding box. Its width is fixed by the caller
//! and its height follows the box's aspect ratio, so projected degrees scale
//! the same way on both axes.

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use map_common::{Axis, BoundingBox, GeoPoint, MapError, MapResult, MetricRange, Region};
use tracing::{debug, trace};

use crate::gradient::{heat_color, Color};
use crate::png::encode_png_auto;

/// Largest height we are willing to allocate for a derived canvas.
pub const MAX_CANVAS_DIMENSION: u32 = 32_768;

/// Linearly map `x` from `[lo, hi]` onto `[0, new_length]`.
///
/// A zero-width source interval maps everything to 0.
pub fn interpolate(x: f64, lo: f64, hi: f64, new_length: f64) -> f64 {
    let span = hi - lo;
    if span == 0.0 {
        return 0.0;
    }
    new_length * (x - lo) / span
}

/// Like [`interpolate`] but measured from the far end.
///
/// Raster rows grow downward while latitude grows northward.
pub fn interpolate_flipped(x: f64, lo: f64, hi: f64, new_length: f64) -> f64 {
    new_length - interpolate(x, lo, hi, new_length)
}

/// White raster plus the geographic box it represents.
pub struct Canvas {
    bbox: BoundingBox,
    image: RgbImage,
}

impl Canvas {
    /// Allocate a white canvas `width` pixels wide for `bbox`.
    ///
    /// Height is `floor(width * lat_span / lon_span)`.
    pub fn new(width: u32, bbox: BoundingBox) -> MapResult<Self> {
        let lon_span = bbox.lon_span();
        let lat_span = bbox.lat_span();
        if !(lon_span > 0.0 && lon_span.is_finite()) {
            return Err(MapError::DegenerateBounds {
                axis: Axis::Longitude,
            });
        }
        if !(lat_span > 0.0 && lat_span.is_finite()) {
            return Err(MapError::DegenerateBounds {
                axis: Axis::Latitude,
            });
        }

        let height = (f64::from(width) * lat_span / lon_span).floor();
        if width > MAX_CANVAS_DIMENSION || height > f64::from(MAX_CANVAS_DIMENSION) {
            return Err(MapError::CanvasTooLarge {
                width,
                height,
                max: MAX_CANVAS_DIMENSION,
            });
        }
        if width == 0 || height < 1.0 {
            return Err(MapError::EmptyCanvas { width });
        }
        let height = height as u32;

        debug!(width, height, ?bbox, "Allocating canvas");

        Ok(Self {
            bbox,
            image: RgbImage::from_pixel(width, height, Color::WHITE.into()),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The rendered raster.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Pixel-space position of a projected point.
    pub fn to_pixel(&self, point: &GeoPoint) -> (f64, f64) {
        let x = interpolate(
            point.lon(),
            self.bbox.min_lon,
            self.bbox.max_lon,
            f64::from(self.width()),
        );
        let y = interpolate_flipped(
            point.lat(),
            self.bbox.min_lat,
            self.bbox.max_lat,
            f64::from(self.height()),
        );
        (x, y)
    }

    /// Pixel-space polygon for a region, same length and order as its coords.
    pub fn pixel_polygon(&self, region: &Region) -> Vec<(f64, f64)> {
        region.coords().iter().map(|p| self.to_pixel(p)).collect()
    }

    /// Fill `region` with its gradient color and outline it in black.
    ///
    /// Later draws paint over earlier ones where they overlap.
    pub fn draw(&mut self, region: &Region, range: &MetricRange) {
        let fill = heat_color(region.metric() / 100.0, range);
        let outline = self.pixel_polygon(region);

        let vertices = fill_vertices(&outline);
        if vertices.len() >= 3 {
            draw_polygon_mut(&mut self.image, &vertices, Rgb::from(fill));
        } else {
            trace!(metric = region.metric(), "Region collapses below one pixel, outline only");
        }

        let black = Rgb::from(Color::BLACK);
        for (i, &(x0, y0)) in outline.iter().enumerate() {
            let (x1, y1) = outline[(i + 1) % outline.len()];
            draw_line_segment_mut(
                &mut self.image,
                (x0 as f32, y0 as f32),
                (x1 as f32, y1 as f32),
                black,
            );
        }
    }

    /// Write the raster as a PNG file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> MapResult<()> {
        let path = path.as_ref();
        let png = encode_png_auto(self.image.as_raw(), self.width() as usize, self.height() as usize)
            .map_err(MapError::Encode)?;
        std::fs::write(path, &png)?;
        debug!(path = %path.display(), bytes = png.len(), "Saved canvas");
        Ok(())
    }
}

/// Integer vertices for the polygon filler.
///
/// Rounding can merge neighbouring vertices, and the filler rejects a ring
/// whose last point repeats the first, so both are dropped here.
fn fill_vertices(outline: &[(f64, f64)]) -> Vec<Point<i32>> {
    let mut points: Vec<Point<i32>> = outline
        .iter()
        .map(|&(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();
    points.dedup();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

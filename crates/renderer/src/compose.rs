//! Side-by-side composition of a map frame and its trend chart.

use std::path::Path;

use image::{imageops, RgbImage};
use map_common::{MapError, MapResult};

use crate::png::encode_png_auto;

/// Place `left` and `right` next to each other on a black background.
///
/// The result is `left.width + right.width` wide and as tall as the taller
/// input; both are anchored to the top edge.
pub fn side_by_side(left: &RgbImage, right: &RgbImage) -> RgbImage {
    let width = left.width() + right.width();
    let height = left.height().max(right.height());

    let mut combined = RgbImage::new(width, height);
    imageops::replace(&mut combined, left, 0, 0);
    imageops::replace(&mut combined, right, i64::from(left.width()), 0);
    combined
}

/// Read a raster from disk as RGB.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> MapResult<RgbImage> {
    let path = path.as_ref();
    image::open(path)
        .map(|img| img.to_rgb8())
        .map_err(|e| MapError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Write an RGB raster as PNG.
pub fn save_rgb<P: AsRef<Path>>(image: &RgbImage, path: P) -> MapResult<()> {
    let png = encode_png_auto(image.as_raw(), image.width() as usize, image.height() as usize)
        .map_err(MapError::Encode)?;
    std::fs::write(path, png)?;
    Ok(())
}

/// Stitch two image files side by side into `output`.
pub fn stitch_files<P, Q, R>(left: P, right: Q, output: R) -> MapResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let left = load_rgb(left)?;
    let right = load_rgb(right)?;
    let combined = side_by_side(&left, &right);
    save_rgb(&combined, &output)?;
    tracing::debug!(
        output = %output.as_ref().display(),
        width = combined.width(),
        height = combined.height(),
        "Stitched images"
    );
    Ok(())
}

//! PNG encoding for RGB raster data.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: Used when the image has at most 256
//!   unique colors. A choropleth usually qualifies: every county is one flat
//!   fill plus black outlines on white.
//! - **Truecolor PNG (color type 2)**: Fallback for images with more colors.
//!
//! Both are lossless. Use `encode_png_auto` for automatic mode selection, or
//! `encode_png` for explicit truecolor encoding.

use rayon::prelude::*;
use std::collections::HashMap;
use std::io::Write;

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Minimum pixels to benefit from parallel palette extraction
const PARALLEL_THRESHOLD: usize = 65_536; // 256x256 or larger

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

type Palette = Vec<(u8, u8, u8)>;

/// Create a PNG image with automatic format selection.
///
/// # Arguments
/// - `pixels`: RGB pixel data (3 bytes per pixel, row-major)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn encode_png_auto(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, String> {
    check_dimensions(pixels, width, height)?;
    let num_pixels = pixels.len() / 3;

    let palette_result = if num_pixels >= PARALLEL_THRESHOLD {
        extract_palette_parallel(pixels)
    } else {
        extract_palette_sequential(pixels)
    };

    match palette_result {
        Some((palette, indices)) => encode_png_indexed(width, height, &palette, &indices),
        None => encode_png(pixels, width, height),
    }
}

fn check_dimensions(pixels: &[u8], width: usize, height: usize) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("Invalid image size {}x{}", width, height));
    }
    if pixels.len() != width * height * 3 {
        return Err(format!(
            "Pixel buffer has {} bytes, expected {} for {}x{} RGB",
            pixels.len(),
            width * height * 3,
            width,
            height
        ));
    }
    Ok(())
}

/// Pack RGB bytes into a u32 for faster hashing and comparison
#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

#[inline(always)]
fn unpack_color(packed: u32) -> (u8, u8, u8) {
    (packed as u8, (packed >> 8) as u8, (packed >> 16) as u8)
}

/// Sequential palette extraction for small images.
fn extract_palette_sequential(pixels: &[u8]) -> Option<(Palette, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Palette = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 3);

    for chunk in pixels.chunks_exact(3) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2]);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push((chunk[0], chunk[1], chunk[2]));
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Parallel palette extraction for larger images.
///
/// Collects unique colors per chunk, merges them, then maps pixels to
/// indices in a second parallel pass.
fn extract_palette_parallel(pixels: &[u8]) -> Option<(Palette, Vec<u8>)> {
    let pixels_per_chunk = (pixels.len() / 3 / rayon::current_num_threads()).max(256);
    let chunk_size = pixels_per_chunk * 3;

    let unique_colors: Vec<u32> = pixels
        .par_chunks(chunk_size)
        .flat_map(|chunk| {
            let mut local_colors: HashMap<u32, ()> = HashMap::with_capacity(MAX_PALETTE_SIZE);
            for pixel in chunk.chunks_exact(3) {
                local_colors.insert(pack_color(pixel[0], pixel[1], pixel[2]), ());
                if local_colors.len() > MAX_PALETTE_SIZE {
                    break;
                }
            }
            local_colors.into_keys().collect::<Vec<_>>()
        })
        .collect();

    let mut global_colors: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Palette = Vec::with_capacity(MAX_PALETTE_SIZE);

    for packed in unique_colors {
        if !global_colors.contains_key(&packed) {
            if palette.len() >= MAX_PALETTE_SIZE {
                return None;
            }
            global_colors.insert(packed, palette.len() as u8);
            palette.push(unpack_color(packed));
        }
    }

    let mut indices = vec![0u8; pixels.len() / 3];
    indices
        .par_chunks_mut(pixels_per_chunk)
        .zip(pixels.par_chunks(chunk_size))
        .for_each(|(idx_chunk, pixel_chunk)| {
            for (idx, pixel) in idx_chunk.iter_mut().zip(pixel_chunk.chunks_exact(3)) {
                let packed = pack_color(pixel[0], pixel[1], pixel[2]);
                *idx = global_colors.get(&packed).copied().unwrap_or(0);
            }
        });

    Some((palette, indices))
}

/// Create an indexed PNG (color type 3) from palette and indices.
pub fn encode_png_indexed(
    width: usize,
    height: usize,
    palette: &[(u8, u8, u8)],
    indices: &[u8],
) -> Result<Vec<u8>, String> {
    if indices.len() != width * height {
        return Err(format!(
            "Index buffer has {} entries, expected {}",
            indices.len(),
            width * height
        ));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let plte_data: Vec<u8> = palette
        .iter()
        .flat_map(|&(r, g, b)| [r, g, b])
        .collect();
    write_chunk(&mut png, b"PLTE", &plte_data);

    let idat_data = deflate_scanlines(indices, width, height, 1)
        .map_err(|e| format!("IDAT compression failed: {}", e))?;
    write_chunk(&mut png, b"IDAT", &idat_data);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Create a truecolor PNG (color type 2) from RGB pixel data.
pub fn encode_png(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, String> {
    check_dimensions(pixels, width, height)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 2));

    let idat_data = deflate_scanlines(pixels, width, height, 3)
        .map_err(|e| format!("IDAT compression failed: {}", e))?;
    write_chunk(&mut png, b"IDAT", &idat_data);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn ihdr(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix every scanline with filter byte 0 and zlib-compress the result.
fn deflate_scanlines(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> std::io::Result<Vec<u8>> {
    let stride = width * bytes_per_pixel;
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for row in data.chunks_exact(stride).take(height) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

//! I/O helpers at the codec boundary.
//!
//! - `load_color_image`: read a PNG/JPEG/etc. into a BGR `ColorImageU8`.
//! - `encode_color_png`: encode an RGB-ordered `ColorImageU8` to PNG bytes.
//! - `save_color_png` / `save_gray_png`: write buffers to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Everything else in the crate works on the owned buffers; the `image`
//! crate is confined to this module.
use super::{ColorImageU8, GrayImageU8};
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, Rgb};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Load an image from disk and convert to the BGR processing order.
pub fn load_color_image(path: &Path) -> Result<ColorImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let rgb = ColorImageU8::from_raw(w, h, img.into_raw())
        .ok_or_else(|| format!("Unexpected buffer size decoding {}", path.display()))?;
    Ok(rgb.swap_channels())
}

/// Encode an RGB-ordered buffer as PNG bytes in memory.
pub fn encode_color_png(img: &ColorImageU8) -> Result<Vec<u8>, String> {
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(img.w as u32, img.h as u32, img.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    let mut out = Vec::new();
    DynamicImage::ImageRgb8(buffer)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| format!("Failed to encode PNG: {e}"))?;
    Ok(out)
}

/// Save an RGB-ordered buffer to a PNG file.
pub fn save_color_png(img: &ColorImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(img.w as u32, img.h as u32, img.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgb8(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a single-channel buffer to a grayscale PNG.
pub fn save_gray_png(img: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(img.w as u32, img.h as u32, img.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_color_png_produces_png_magic() {
        let mut img = ColorImageU8::new(4, 3);
        img.set(1, 1, [200, 100, 50]);
        let bytes = encode_color_png(&img).expect("encode");
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}

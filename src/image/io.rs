//! I/O helpers for images and JSON.
//!
//! - `load_rgb_image`: read a PNG into an owned [`Image`].
//! - `save_rgb_png`: write an [`Image`] as an RGB PNG.
//! - `save_gray_png`: write a `Matrix<u8>` as a grayscale PNG.
//! - `write_json_file`: store a serializable report as indented JSON.
use super::Image;
use crate::color::Color;
use crate::matrix::{Matrix, MatrixView};
use image::{GrayImage, Luma, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decode an image file into an RGB [`Image`], whatever its stored format.
pub fn load_rgb_image(path: &Path) -> Result<Image, String> {
    let rgb = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let pixels: Vec<Color> = rgb.pixels().map(|&px| Color::from(px)).collect();
    let matrix = Matrix::from_vec(height, width, pixels)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))?;
    Ok(Image::from_matrix(matrix))
}

/// Save an image as an RGB PNG. Rows map to `y`, columns to `x`.
pub fn save_rgb_png(image: &Image, path: &Path) -> Result<(), String> {
    create_parent_dirs(path)?;
    let mut out = RgbImage::new(image.cols() as u32, image.rows() as u32);
    for (y, row) in image.row_iter().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, px.into());
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an 8-bit single-channel buffer as a grayscale PNG.
pub fn save_gray_png(gray: &Matrix<u8>, path: &Path) -> Result<(), String> {
    create_parent_dirs(path)?;
    let mut out = GrayImage::new(gray.cols() as u32, gray.rows() as u32);
    for (y, row) in gray.row_iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Write `value` as indented JSON, creating missing directories first.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    create_parent_dirs(path)?;
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| format!("Cannot encode JSON report {}: {e}", path.display()))?;
    fs::write(path, bytes).map_err(|e| format!("Cannot write {}: {e}", path.display()))
}

fn create_parent_dirs(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create directory {}: {e}", dir.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.png");

        let mut img = Image::new(3, 5);
        img[(0, 0)] = Color::new(255, 0, 0);
        img[(2, 4)] = Color::new(1, 2, 3);
        save_rgb_png(&img, &path).unwrap();

        let loaded = load_rgb_image(&path).unwrap();
        assert_eq!(loaded.dims(), (3, 5));
        assert_eq!(loaded, img);
    }

    #[test]
    fn gray_png_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let mut gray = Matrix::<u8>::new(4, 2);
        gray.fill(7);
        save_gray_png(&gray, &path).unwrap();

        let back = load_rgb_image(&path).unwrap();
        assert_eq!(back.dims(), (4, 2));
        assert!(back.as_slice().iter().all(|&c| c == Color::gray(7)));
    }

    #[test]
    fn json_report_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/deep/summary.json");
        write_json_file(&path, &Color::new(1, 2, 3)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: Color = serde_json::from_str(&text).unwrap();
        assert_eq!(back, Color::new(1, 2, 3));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_rgb_image(Path::new("/nonexistent/definitely.png")).unwrap_err();
        assert!(err.contains("definitely.png"), "unexpected error: {err}");
    }
}

use crate::image::pattern::Pattern;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ImageDemoConfig {
    #[serde(default)]
    pub shape: ShapeConfig,
    #[serde(default)]
    pub pattern: Pattern,
    pub output: ImageOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self { rows: 64, cols: 96 }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageOutputConfig {
    /// RGB PNG of the painted image.
    pub png: PathBuf,
    /// Optional luma-only PNG.
    #[serde(default)]
    pub gray_png: Option<PathBuf>,
    /// Optional JSON report (allocation + load outcome).
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ImageDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<ImageDemoConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn defaults_fill_missing_sections() {
        let cfg = parse_config(r#"{"output":{"png":"out/img.png"}}"#).unwrap();
        assert_eq!((cfg.shape.rows, cfg.shape.cols), (64, 96));
        assert_eq!(cfg.pattern, Pattern::default());
        assert_eq!(cfg.output.png, PathBuf::from("out/img.png"));
        assert!(cfg.output.gray_png.is_none());
    }

    #[test]
    fn explicit_sections_override_defaults() {
        let cfg = parse_config(
            r#"{
                "shape": {"rows": 8},
                "pattern": {"kind": "checkerboard", "cell": 4,
                            "dark": {"r": 0, "g": 0, "b": 0},
                            "light": {"r": 200, "g": 200, "b": 200}},
                "output": {"png": "a.png", "summary_json": "a.json"}
            }"#,
        )
        .unwrap();
        assert_eq!((cfg.shape.rows, cfg.shape.cols), (8, 96));
        assert_eq!(
            cfg.pattern,
            Pattern::Checkerboard {
                cell: 4,
                dark: Color::BLACK,
                light: Color::gray(200),
            }
        );
        assert_eq!(cfg.output.summary_json, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_config(Path::new("/nonexistent/demo.json")).unwrap_err();
        assert!(err.starts_with("Failed to read config"));
    }
}

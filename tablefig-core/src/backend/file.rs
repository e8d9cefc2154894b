use super::render::{canvas_size, draw_figure};
use super::FigureBackend;
use crate::error::TableError;
use crate::figure::{Figure, DEFAULT_DPI};
use plotters::backend::SVGBackend;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }

    /// Format implied by a path's extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ImageFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(TableError::InvalidImageFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Writes each shown figure to an image file, overwriting earlier ones.
#[derive(Debug, Clone)]
pub struct ImageFile {
    path: PathBuf,
    format: ImageFormat,
    dpi: f64,
}

impl ImageFile {
    pub fn new(path: impl Into<PathBuf>, format: ImageFormat) -> Self {
        Self {
            path: path.into(),
            format,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

impl FigureBackend for ImageFile {
    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn show(&mut self, figure: &Figure) -> Result<(), TableError> {
        write_image(&self.path, self.format, figure)?;
        log::info!("wrote table image to {}", self.path.display());
        Ok(())
    }
}

pub(crate) fn write_image(path: &Path, format: ImageFormat, figure: &Figure) -> Result<(), TableError> {
    let size = canvas_size(figure)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    log::debug!("rendering {}x{} px {format} canvas", size.0, size.1);
    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_figure(&root, figure)?;
            root.present().map_err(|e| TableError::Render(e.to_string()))?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_figure(&root, figure)?;
            root.present().map_err(|e| TableError::Render(e.to_string()))?;
        }
    }
    Ok(())
}

/// Renders a figure to an SVG document held in memory.
pub fn render_svg_string(figure: &Figure) -> Result<String, TableError> {
    let size = canvas_size(figure)?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_figure(&root, figure)?;
        root.present().map_err(|e| TableError::Render(e.to_string()))?;
    }
    Ok(svg)
}

use super::file::{write_image, ImageFormat};
use super::FigureBackend;
use crate::error::TableError;
use crate::figure::{Figure, DEFAULT_DPI};
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(target_os = "macos")]
pub const DEFAULT_VIEWER: &str = "open";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_VIEWER: &str = "xdg-open";

/// Renders to a temporary PNG and blocks until the viewer command exits.
/// The PNG is removed once the viewer returns.
#[derive(Debug, Clone)]
pub struct ViewerBackend {
    command: String,
    dir: PathBuf,
    dpi: f64,
}

impl Default for ViewerBackend {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWER)
    }
}

impl ViewerBackend {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            dir: std::env::temp_dir(),
            dpi: DEFAULT_DPI,
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn launch(&self, path: &Path) -> Result<(), TableError> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| TableError::Viewer("empty viewer command".to_string()))?;
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|e| TableError::Viewer(format!("failed to launch '{program}': {e}")))?;
        if status.success() {
            Ok(())
        } else {
            Err(TableError::Viewer(format!("'{program}' exited with {status}")))
        }
    }
}

impl FigureBackend for ViewerBackend {
    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn show(&mut self, figure: &Figure) -> Result<(), TableError> {
        let file = tempfile::Builder::new()
            .prefix("tablefig_")
            .suffix(".png")
            .tempfile_in(&self.dir)?;
        write_image(file.path(), ImageFormat::Png, figure)?;
        log::info!("opening {} with {}", file.path().display(), self.command);
        let shown = self.launch(file.path());
        file.close()?;
        shown
    }
}

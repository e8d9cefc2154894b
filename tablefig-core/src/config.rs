use crate::backend::{FigureBackend, ImageFile, ImageFormat, ViewerBackend};
use crate::error::TableError;
use crate::figure::DEFAULT_DPI;
use crate::options::TableOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "tablefig.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub dpi: f64,
    pub format: ImageFormat,
    /// Command used to display images when no output file is given.
    pub viewer: Option<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            format: ImageFormat::Png,
            viewer: None,
        }
    }
}

impl OutputSettings {
    /// Format for an output file: `explicit` if set, else the one named by
    /// the extension, else `format`.
    pub fn file_format(&self, path: &Path, explicit: Option<ImageFormat>) -> ImageFormat {
        explicit
            .or_else(|| ImageFormat::from_path(path))
            .unwrap_or(self.format)
    }

    /// File backend when `out` is given, otherwise the system viewer.
    pub fn backend(
        &self,
        out: Option<&Path>,
        explicit: Option<ImageFormat>,
    ) -> Box<dyn FigureBackend> {
        match out {
            Some(path) => {
                let format = self.file_format(path, explicit);
                Box::new(ImageFile::new(path, format).with_dpi(self.dpi))
            }
            None => {
                let viewer = match &self.viewer {
                    Some(command) => ViewerBackend::new(command.clone()),
                    None => ViewerBackend::default(),
                };
                Box::new(viewer.with_dpi(self.dpi))
            }
        }
    }
}

/// Contents of `tablefig.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablefigConfig {
    pub table: TableOptions,
    pub output: OutputSettings,
}

impl TablefigConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, TableError> {
        Ok(toml::from_str(data)?)
    }

    /// Loads `path` if given, else `tablefig.toml` in the working directory
    /// when present, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, TableError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            log::debug!("using config {}", fallback.display());
            Self::load_from_file(fallback)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String, TableError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

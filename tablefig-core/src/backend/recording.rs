use super::FigureBackend;
use crate::error::TableError;
use crate::figure::{Figure, DEFAULT_DPI};
use crate::options::FigureSize;

/// Keeps every shown figure in memory instead of displaying it.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    figsize: FigureSize,
    dpi: f64,
    figures: Vec<Figure>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            figsize: FigureSize::default(),
            dpi: DEFAULT_DPI,
            figures: Vec::new(),
        }
    }

    pub fn with_default_figsize(mut self, figsize: FigureSize) -> Self {
        self.figsize = figsize;
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }

    pub fn take(&mut self) -> Vec<Figure> {
        std::mem::take(&mut self.figures)
    }
}

impl FigureBackend for RecordingBackend {
    fn default_figsize(&self) -> FigureSize {
        self.figsize
    }

    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn show(&mut self, figure: &Figure) -> Result<(), TableError> {
        self.figures.push(figure.clone());
        Ok(())
    }
}

pub mod file;
pub mod recording;
pub mod render;
pub mod viewer;

pub use file::{render_svg_string, ImageFile, ImageFormat};
pub use recording::RecordingBackend;
pub use viewer::ViewerBackend;

use crate::error::TableError;
use crate::figure::{Figure, DEFAULT_DPI};
use crate::options::FigureSize;

/// Explicit drawing context a figure is created against and shown on.
///
/// Replaces any notion of a process-wide "current figure": callers own the
/// backend and pass it to each render call.
pub trait FigureBackend {
    /// Size used when the caller does not give one.
    fn default_figsize(&self) -> FigureSize {
        FigureSize::default()
    }

    fn dpi(&self) -> f64 {
        DEFAULT_DPI
    }

    /// Displays a finished figure. May block, depending on the backend.
    fn show(&mut self, figure: &Figure) -> Result<(), TableError>;
}

impl<B: FigureBackend + ?Sized> FigureBackend for Box<B> {
    fn default_figsize(&self) -> FigureSize {
        (**self).default_figsize()
    }

    fn dpi(&self) -> f64 {
        (**self).dpi()
    }

    fn show(&mut self, figure: &Figure) -> Result<(), TableError> {
        (**self).show(figure)
    }
}

pub mod backend;
pub mod config;
pub mod error;
pub mod figure;
pub mod options;
pub mod table;

pub use backend::{
    render_svg_string, FigureBackend, ImageFile, ImageFormat, RecordingBackend, ViewerBackend,
};
pub use config::{OutputSettings, TablefigConfig};
pub use dataset::{Cell, DataFrame};
pub use error::TableError;
pub use figure::{Axes, Figure, Rect};
pub use options::{AxisMode, CellAlign, FigureSize, TableLoc, TableOptions};
pub use table::{CellRole, Table, TableCell, TableStyle};

/// Builds the figure for `data` without showing it.
///
/// Steps run in a fixed order: size the figure, apply the height override,
/// set the frame, set the axis mode, then lay out the table.
pub fn build_figure<B: FigureBackend + ?Sized>(
    backend: &B,
    data: &DataFrame,
    options: &TableOptions,
) -> Result<Figure, TableError> {
    let figsize = options.figsize.unwrap_or_else(|| backend.default_figsize());
    let mut figure = Figure::new(figsize, backend.dpi())?;
    if let Some(height) = options.fig_height {
        figure.set_figheight(height)?;
    }
    figure.axes_mut().set_frame_on(options.frame);
    figure.axes_mut().axis(options.axis);
    table::table(&mut figure, data, &TableStyle::from(options))?;
    Ok(figure)
}

/// Renders `data` as a table image and shows it on `backend`.
///
/// Errors from figure construction, table layout or the backend are
/// returned as they were raised.
pub fn make_image_table<B: FigureBackend + ?Sized>(
    backend: &mut B,
    data: &DataFrame,
    options: &TableOptions,
) -> Result<(), TableError> {
    log::debug!(
        "make_image_table: {}x{} dataset, axis {}, frame {}",
        data.n_rows(),
        data.n_cols(),
        options.axis,
        options.frame
    );
    let figure = build_figure(&*backend, data, options)?;
    backend.show(&figure)
}

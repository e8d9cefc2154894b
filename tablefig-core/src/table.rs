use crate::error::TableError;
use crate::figure::{Figure, Rect};
use crate::options::{CellAlign, TableLoc, TableOptions};
use dataset::DataFrame;
use serde::Serialize;

pub const DEFAULT_FONT_SIZE: f64 = 10.0;
pub const MIN_FONT_SIZE: f64 = 1.0;
/// Horizontal text padding as a fraction of the cell width.
pub const CELL_PAD: f64 = 0.1;
/// Row height as a multiple of the font size.
pub const ROW_HEIGHT_SCALE: f64 = 1.2;
/// Approximate advance of one character, in ems.
const CHAR_WIDTH_EM: f64 = 0.6;

/// Estimated rendered width of `text` at `font_px`.
pub fn text_width_px(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * CHAR_WIDTH_EM
}

/// Table styling forwarded from [`TableOptions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub cell_loc: CellAlign,
    pub row_loc: CellAlign,
    pub col_loc: CellAlign,
    pub font_size: Option<f64>,
    pub loc: TableLoc,
}

impl From<&TableOptions> for TableStyle {
    fn from(options: &TableOptions) -> Self {
        Self {
            cell_loc: options.cell_loc,
            row_loc: options.row_loc,
            col_loc: options.col_loc,
            font_size: options.font_size,
            loc: options.loc,
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::from(&TableOptions::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRole {
    Header,
    RowLabel,
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    /// Grid row; `0` is the header row when the table has columns.
    pub row: usize,
    /// Data column, `None` for the row label column.
    pub col: Option<usize>,
    pub role: CellRole,
    pub text: String,
    pub align: CellAlign,
    pub rect: Rect,
}

impl TableCell {
    /// Anchor point for the cell text, honoring alignment and padding.
    pub fn text_anchor(&self) -> (f64, f64) {
        let pad = CELL_PAD * self.rect.width;
        let (cx, cy) = self.rect.center();
        match self.align {
            CellAlign::Left => (self.rect.x + pad, cy),
            CellAlign::Center => (cx, cy),
            CellAlign::Right => (self.rect.right() - pad, cy),
        }
    }
}

/// A grid of text cells laid out against an axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    cells: Vec<TableCell>,
    font_size: f64,
    auto_font_size: bool,
    cell_loc: CellAlign,
    row_loc: CellAlign,
    col_loc: CellAlign,
    loc: TableLoc,
    n_rows: usize,
    n_cols: usize,
    bbox: Rect,
}

impl Table {
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn cells_with_role(&self, role: CellRole) -> impl Iterator<Item = &TableCell> {
        self.cells.iter().filter(move |cell| cell.role == role)
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn auto_font_size(&self) -> bool {
        self.auto_font_size
    }

    pub fn cell_loc(&self) -> CellAlign {
        self.cell_loc
    }

    pub fn row_loc(&self) -> CellAlign {
        self.row_loc
    }

    pub fn col_loc(&self) -> CellAlign {
        self.col_loc
    }

    pub fn loc(&self) -> TableLoc {
        self.loc
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }
}

/// Builds a table from `data` and attaches it to the figure's axes.
///
/// Column labels become a header row and the index becomes a row label
/// column to the left of the body.
pub fn table(figure: &mut Figure, data: &DataFrame, style: &TableStyle) -> Result<(), TableError> {
    let built = layout(figure, data, style)?;
    log::debug!(
        "table laid out: {} rows x {} cols at {}pt",
        built.n_rows,
        built.n_cols,
        built.font_size
    );
    figure.axes_mut().attach_table(built);
    Ok(())
}

fn layout(figure: &Figure, data: &DataFrame, style: &TableStyle) -> Result<Table, TableError> {
    let axes = figure.axes_rect();
    let n_rows = data.n_rows();
    let n_cols = data.n_cols();
    let cell_text = data.cell_text();

    let col_width = if n_cols > 0 {
        axes.width / n_cols as f64
    } else {
        0.0
    };

    let (font_size, auto_font_size) = match style.font_size {
        Some(size) if size.is_finite() && size > 0.0 => (size, false),
        Some(size) => return Err(TableError::InvalidFontSize(size)),
        None => {
            let widest = data
                .columns()
                .iter()
                .chain(cell_text.iter().flatten())
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0);
            (fit_font_size(figure, widest, col_width), true)
        }
    };

    let font_px = figure.points_to_px(font_size);
    let row_height = font_px * ROW_HEIGHT_SCALE;

    let label_width = data
        .index()
        .iter()
        .map(|label| text_width_px(label, font_px))
        .fold(0.0_f64, f64::max)
        / (1.0 - 2.0 * CELL_PAD);

    let header_rows = usize::from(n_cols > 0);
    let table_height = (n_rows + header_rows) as f64 * row_height;
    let body_width = col_width * n_cols as f64;
    let table_width = label_width + body_width;

    let (body_x, top) = match style.loc {
        TableLoc::Bottom => (axes.x, axes.bottom()),
        TableLoc::Top => (axes.x, axes.y - table_height),
        TableLoc::Center => {
            let (cx, cy) = axes.center();
            (
                cx - table_width / 2.0 + label_width,
                cy - table_height / 2.0,
            )
        }
    };

    let mut cells = Vec::with_capacity((n_rows + header_rows) * (n_cols + 1));
    if n_cols > 0 {
        for (c, name) in data.columns().iter().enumerate() {
            cells.push(TableCell {
                row: 0,
                col: Some(c),
                role: CellRole::Header,
                text: name.clone(),
                align: style.col_loc,
                rect: Rect::new(body_x + c as f64 * col_width, top, col_width, row_height),
            });
        }
    }

    for (r, (label, values)) in data.index().iter().zip(cell_text).enumerate() {
        let grid_row = r + header_rows;
        let y = top + grid_row as f64 * row_height;
        if label_width > 0.0 {
            cells.push(TableCell {
                row: grid_row,
                col: None,
                role: CellRole::RowLabel,
                text: label.clone(),
                align: style.row_loc,
                rect: Rect::new(body_x - label_width, y, label_width, row_height),
            });
        }
        for (c, text) in values.into_iter().enumerate() {
            cells.push(TableCell {
                row: grid_row,
                col: Some(c),
                role: CellRole::Body,
                text,
                align: style.cell_loc,
                rect: Rect::new(body_x + c as f64 * col_width, y, col_width, row_height),
            });
        }
    }

    Ok(Table {
        cells,
        font_size,
        auto_font_size,
        cell_loc: style.cell_loc,
        row_loc: style.row_loc,
        col_loc: style.col_loc,
        loc: style.loc,
        n_rows,
        n_cols,
        bbox: Rect::new(body_x - label_width, top, table_width, table_height),
    })
}

/// Largest whole point size, at most the default, whose widest text fits
/// inside a padded column.
fn fit_font_size(figure: &Figure, widest_chars: usize, col_width: f64) -> f64 {
    if widest_chars == 0 || col_width <= 0.0 {
        return DEFAULT_FONT_SIZE;
    }
    let available = col_width * (1.0 - 2.0 * CELL_PAD);
    let mut size = DEFAULT_FONT_SIZE;
    while size > MIN_FONT_SIZE {
        let needed = widest_chars as f64 * figure.points_to_px(size) * CHAR_WIDTH_EM;
        if needed <= available {
            break;
        }
        size -= 1.0;
    }
    size
}

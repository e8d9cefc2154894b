use crate::error::TableError;
use crate::figure::{Figure, Rect};
use crate::options::CellAlign;
use crate::table::{CellRole, Table};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const TICK_COUNT: usize = 6;
const TICK_LENGTH_PT: f64 = 3.5;
const TICK_LABEL_PT: f64 = 10.0;
const HEADER_FILL: RGBColor = RGBColor(255, 255, 255);
const CELL_FILL: RGBColor = RGBColor(255, 255, 255);
const EDGE_COLOR: RGBColor = RGBColor(0, 0, 0);
const TEXT_COLOR: RGBColor = RGBColor(0, 0, 0);

/// Largest canvas side, in pixels, that will be rendered.
pub const MAX_CANVAS_PX: u32 = 1 << 16;

/// Pixel size of the canvas needed to show `figure` in full.
///
/// Fails with [`TableError::ImageTooLarge`] when either side reaches
/// [`MAX_CANVAS_PX`].
pub fn canvas_size(figure: &Figure) -> Result<(u32, u32), TableError> {
    let bounds = figure.tight_bounds();
    let width = bounds.width.ceil().max(1.0);
    let height = bounds.height.ceil().max(1.0);
    let limit = f64::from(MAX_CANVAS_PX);
    if !(width < limit && height < limit) {
        return Err(TableError::ImageTooLarge {
            width,
            height,
            max: MAX_CANVAS_PX,
        });
    }
    Ok((width as u32, height as u32))
}

/// Draws `figure` onto `root`, which must be at least [`canvas_size`].
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<(), TableError> {
    let bounds = figure.tight_bounds();
    let offset = (-bounds.x, -bounds.y);

    root.fill(&WHITE).map_err(|e| TableError::Render(e.to_string()))?;

    let axes = figure.axes();
    let axes_rect = figure.axes_rect();
    if axes.axis_mode().is_visible() {
        if axes.draws_frame() {
            let (x0, y0) = to_px(offset, axes_rect.x, axes_rect.y);
            let (x1, y1) = to_px(offset, axes_rect.right(), axes_rect.bottom());
            root.draw(&Rectangle::new([(x0, y0), (x1, y1)], EDGE_COLOR.stroke_width(1)))
                .map_err(|e| TableError::Render(e.to_string()))?;
        }
        draw_ticks(root, figure, &axes_rect, offset)?;
    }

    if let Some(table) = axes.table() {
        draw_table(root, figure, table, offset)?;
    }
    Ok(())
}

fn draw_ticks<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    axes_rect: &Rect,
    offset: (f64, f64),
) -> Result<(), TableError> {
    let tick = figure.points_to_px(TICK_LENGTH_PT);
    let font_px = figure.points_to_px(TICK_LABEL_PT);
    let font = ("sans-serif", font_px).into_font().color(&TEXT_COLOR);

    for i in 0..TICK_COUNT {
        let frac = i as f64 / (TICK_COUNT - 1) as f64;
        let label = format!("{frac:.1}");

        let x = axes_rect.x + frac * axes_rect.width;
        let base = axes_rect.bottom();
        root.draw(&PathElement::new(
            vec![to_px(offset, x, base), to_px(offset, x, base + tick)],
            EDGE_COLOR,
        ))
        .map_err(|e| TableError::Render(e.to_string()))?;
        root.draw_text(
            &label,
            &font.pos(Pos::new(HPos::Center, VPos::Top)),
            to_px(offset, x, base + tick * 1.5),
        )
        .map_err(|e| TableError::Render(e.to_string()))?;

        let y = axes_rect.bottom() - frac * axes_rect.height;
        let left = axes_rect.x;
        root.draw(&PathElement::new(
            vec![to_px(offset, left - tick, y), to_px(offset, left, y)],
            EDGE_COLOR,
        ))
        .map_err(|e| TableError::Render(e.to_string()))?;
        root.draw_text(
            &label,
            &font.pos(Pos::new(HPos::Right, VPos::Center)),
            to_px(offset, left - tick * 1.5, y),
        )
        .map_err(|e| TableError::Render(e.to_string()))?;
    }
    Ok(())
}

fn draw_table<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    table: &Table,
    offset: (f64, f64),
) -> Result<(), TableError> {
    let font_px = figure.points_to_px(table.font_size());
    let font = ("sans-serif", font_px).into_font().color(&TEXT_COLOR);

    for cell in table.cells() {
        let (x0, y0) = to_px(offset, cell.rect.x, cell.rect.y);
        let (x1, y1) = to_px(offset, cell.rect.right(), cell.rect.bottom());
        let fill = match cell.role {
            CellRole::Header => HEADER_FILL,
            CellRole::RowLabel | CellRole::Body => CELL_FILL,
        };
        root.draw(&Rectangle::new([(x0, y0), (x1, y1)], fill.filled()))
            .map_err(|e| TableError::Render(e.to_string()))?;
        root.draw(&Rectangle::new([(x0, y0), (x1, y1)], EDGE_COLOR.stroke_width(1)))
            .map_err(|e| TableError::Render(e.to_string()))?;

        if cell.text.is_empty() {
            continue;
        }
        let h_pos = match cell.align {
            CellAlign::Left => HPos::Left,
            CellAlign::Center => HPos::Center,
            CellAlign::Right => HPos::Right,
        };
        let (tx, ty) = cell.text_anchor();
        root.draw_text(
            &cell.text,
            &font.pos(Pos::new(h_pos, VPos::Center)),
            to_px(offset, tx, ty),
        )
        .map_err(|e| TableError::Render(e.to_string()))?;
    }
    Ok(())
}

fn to_px(offset: (f64, f64), x: f64, y: f64) -> (i32, i32) {
    ((x + offset.0).round() as i32, (y + offset.1).round() as i32)
}

use crate::error::TableError;
use crate::options::{AxisMode, FigureSize};
use crate::table::Table;
use serde::Serialize;

pub const DEFAULT_DPI: f64 = 100.0;

/// Subplot box of a single-axes figure, as fractions of the figure.
pub const SUBPLOT_LEFT: f64 = 0.125;
pub const SUBPLOT_RIGHT: f64 = 0.9;
pub const SUBPLOT_BOTTOM: f64 = 0.11;
pub const SUBPLOT_TOP: f64 = 0.88;

/// Axis-aligned rectangle in pixels, origin top-left, y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    pub fn expand(&self, pad: f64) -> Rect {
        Rect::new(
            self.x - pad,
            self.y - pad,
            self.width + 2.0 * pad,
            self.height + 2.0 * pad,
        )
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// The single plotting region of a [`Figure`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axes {
    frame_on: bool,
    axis_mode: AxisMode,
    table: Option<Table>,
}

impl Axes {
    fn new() -> Self {
        Self {
            frame_on: true,
            axis_mode: AxisMode::On,
            table: None,
        }
    }

    pub fn set_frame_on(&mut self, frame_on: bool) {
        self.frame_on = frame_on;
    }

    pub fn axis(&mut self, mode: AxisMode) {
        self.axis_mode = mode;
    }

    pub fn frame_on(&self) -> bool {
        self.frame_on
    }

    pub fn axis_mode(&self) -> AxisMode {
        self.axis_mode
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub(crate) fn attach_table(&mut self, table: Table) {
        self.table = Some(table);
    }

    /// Spines are drawn only while the axis itself is shown.
    pub fn draws_frame(&self) -> bool {
        self.frame_on && self.axis_mode.is_visible()
    }
}

/// A drawing surface holding one [`Axes`].
///
/// Lives for a single render call; backends receive it by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    size: FigureSize,
    dpi: f64,
    axes: Axes,
}

impl Figure {
    pub fn new(size: FigureSize, dpi: f64) -> Result<Self, TableError> {
        size.validate()?;
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(TableError::InvalidDpi(dpi));
        }
        Ok(Self {
            size,
            dpi,
            axes: Axes::new(),
        })
    }

    pub fn set_figheight(&mut self, height: f64) -> Result<(), TableError> {
        let size = FigureSize::new(self.size.width, height);
        size.validate()?;
        self.size = size;
        Ok(())
    }

    pub fn size(&self) -> FigureSize {
        self.size
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    pub fn width_px(&self) -> f64 {
        self.size.width * self.dpi
    }

    pub fn height_px(&self) -> f64 {
        self.size.height * self.dpi
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_px(), self.height_px())
    }

    /// Pixel rectangle of the axes under the current size and axis mode.
    pub fn axes_rect(&self) -> Rect {
        let w = self.width_px();
        let h = self.height_px();
        let mut rect = Rect::new(
            SUBPLOT_LEFT * w,
            (1.0 - SUBPLOT_TOP) * h,
            (SUBPLOT_RIGHT - SUBPLOT_LEFT) * w,
            (SUBPLOT_TOP - SUBPLOT_BOTTOM) * h,
        );
        if self.axes.axis_mode.is_square() {
            let side = rect.width.min(rect.height);
            let (cx, cy) = rect.center();
            rect = Rect::new(cx - side / 2.0, cy - side / 2.0, side, side);
        }
        rect
    }

    /// Points to pixels at this figure's dpi.
    pub fn points_to_px(&self, points: f64) -> f64 {
        points / 72.0 * self.dpi
    }

    /// Area an image of this figure must cover: the figure itself grown to
    /// include any table drawn outside it, plus padding.
    pub fn tight_bounds(&self) -> Rect {
        let bounds = self.bounds();
        match self.axes.table() {
            Some(table) if !bounds.contains(&table.bbox()) => {
                let pad = TIGHT_PAD_INCHES * self.dpi;
                bounds.union(&table.bbox().expand(pad))
            }
            _ => bounds,
        }
    }
}

const TIGHT_PAD_INCHES: f64 = 0.1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_rect_follows_subplot_box() {
        let figure = Figure::new(FigureSize::new(10.0, 10.0), 100.0).unwrap();
        let rect = figure.axes_rect();
        assert!((rect.x - 125.0).abs() < 1e-9);
        assert!((rect.width - 775.0).abs() < 1e-9);
        assert!((rect.y - 120.0).abs() < 1e-9);
        assert!((rect.height - 770.0).abs() < 1e-9);
    }

    #[test]
    fn square_mode_shrinks_axes() {
        let mut figure = Figure::new(FigureSize::new(8.0, 4.0), 100.0).unwrap();
        figure.axes_mut().axis(AxisMode::Square);
        let rect = figure.axes_rect();
        assert!((rect.width - rect.height).abs() < 1e-9);
    }

    #[test]
    fn set_figheight_rejects_zero() {
        let mut figure = Figure::new(FigureSize::default(), DEFAULT_DPI).unwrap();
        assert!(matches!(
            figure.set_figheight(0.0),
            Err(TableError::InvalidFigureSize { .. })
        ));
        assert_eq!(figure.size(), FigureSize::default());
    }

    #[test]
    fn new_axes_start_visible() {
        let figure = Figure::new(FigureSize::default(), DEFAULT_DPI).unwrap();
        assert!(figure.axes().frame_on());
        assert_eq!(figure.axes().axis_mode(), AxisMode::On);
        assert!(figure.axes().table().is_none());
    }
}

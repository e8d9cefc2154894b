use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Figure height used by [`TableOptions::legacy`], in inches.
pub const LEGACY_FIG_HEIGHT: f64 = 0.1;

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), TableError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(TableError::InvalidFigureSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(6.4, 4.8)
    }
}

impl fmt::Display for FigureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for FigureSize {
    type Err = TableError;

    /// Parses `WIDTHxHEIGHT` (also `WIDTH,HEIGHT`). Range checks happen when
    /// the figure is created.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TableError::MalformedFigureSize(s.to_string());
        let (w, h) = s
            .split_once(|c: char| c == 'x' || c == 'X' || c == ',')
            .ok_or_else(malformed)?;
        let width = w.trim().parse::<f64>().map_err(|_| malformed())?;
        let height = h.trim().parse::<f64>().map_err(|_| malformed())?;
        Ok(Self::new(width, height))
    }
}

/// Axis display mode, as accepted by `axes.axis(mode)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    On,
    #[default]
    Off,
    Equal,
    Scaled,
    Tight,
    Auto,
    Image,
    Square,
}

impl AxisMode {
    /// Every mode except `Off` leaves the axis decorations visible.
    pub fn is_visible(self) -> bool {
        self != AxisMode::Off
    }

    /// Modes that force a square axes box.
    pub fn is_square(self) -> bool {
        matches!(self, AxisMode::Square | AxisMode::Image | AxisMode::Scaled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AxisMode::On => "on",
            AxisMode::Off => "off",
            AxisMode::Equal => "equal",
            AxisMode::Scaled => "scaled",
            AxisMode::Tight => "tight",
            AxisMode::Auto => "auto",
            AxisMode::Image => "image",
            AxisMode::Square => "square",
        }
    }
}

impl From<bool> for AxisMode {
    fn from(value: bool) -> Self {
        if value {
            AxisMode::On
        } else {
            AxisMode::Off
        }
    }
}

impl FromStr for AxisMode {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "true" => Ok(AxisMode::On),
            "off" | "false" => Ok(AxisMode::Off),
            "equal" => Ok(AxisMode::Equal),
            "scaled" => Ok(AxisMode::Scaled),
            "tight" => Ok(AxisMode::Tight),
            "auto" => Ok(AxisMode::Auto),
            "image" => Ok(AxisMode::Image),
            "square" => Ok(AxisMode::Square),
            _ => Err(TableError::InvalidAxisMode(s.to_string())),
        }
    }
}

impl fmt::Display for AxisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal placement of text inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl FromStr for CellAlign {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(CellAlign::Left),
            "center" | "centre" => Ok(CellAlign::Center),
            "right" => Ok(CellAlign::Right),
            _ => Err(TableError::InvalidCellAlign(s.to_string())),
        }
    }
}

/// Where the table sits relative to its axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLoc {
    #[default]
    Bottom,
    Center,
    Top,
}

impl FromStr for TableLoc {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bottom" => Ok(TableLoc::Bottom),
            "center" | "centre" => Ok(TableLoc::Center),
            "top" => Ok(TableLoc::Top),
            _ => Err(TableError::InvalidTableLoc(s.to_string())),
        }
    }
}

/// Display parameters for [`make_image_table`](crate::make_image_table).
///
/// Fields are independent and forwarded as-is; nothing here is validated
/// until the figure and table are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Figure size in inches. `None` uses the backend default.
    pub figsize: Option<FigureSize>,
    /// Overrides the figure height after creation.
    pub fig_height: Option<f64>,
    /// Draw the axes frame (spines).
    pub frame: bool,
    pub axis: AxisMode,
    /// Alignment of body cells.
    pub cell_loc: CellAlign,
    /// Alignment of row label cells.
    pub row_loc: CellAlign,
    /// Alignment of column header cells.
    pub col_loc: CellAlign,
    /// Fixed font size in points. `None` shrinks the font to fit.
    pub font_size: Option<f64>,
    pub loc: TableLoc,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            figsize: None,
            fig_height: None,
            frame: false,
            axis: AxisMode::Off,
            cell_loc: CellAlign::Center,
            row_loc: CellAlign::Left,
            col_loc: CellAlign::Center,
            font_size: None,
            loc: TableLoc::Bottom,
        }
    }
}

impl TableOptions {
    /// Defaults of the fixed-height variant: a 0.1 inch tall figure and
    /// no alignment or font overrides.
    pub fn legacy() -> Self {
        Self {
            fig_height: Some(LEGACY_FIG_HEIGHT),
            ..Self::default()
        }
    }

    pub fn with_figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = Some(FigureSize::new(width, height));
        self
    }

    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_axis(mut self, axis: AxisMode) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_cell_loc(mut self, cell_loc: CellAlign) -> Self {
        self.cell_loc = cell_loc;
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }
}

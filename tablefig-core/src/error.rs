use dataset::DatasetError;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("unrecognized axis mode '{0}'")]
    InvalidAxisMode(String),
    #[error("unrecognized cell alignment '{0}'")]
    InvalidCellAlign(String),
    #[error("unrecognized table location '{0}'")]
    InvalidTableLoc(String),
    #[error("unrecognized image format '{0}'")]
    InvalidImageFormat(String),
    #[error("figure size must be finite and positive, got {width}x{height}")]
    InvalidFigureSize { width: f64, height: f64 },
    #[error("malformed figure size '{0}', expected WIDTHxHEIGHT")]
    MalformedFigureSize(String),
    #[error("font size must be finite and positive, got {0}")]
    InvalidFontSize(f64),
    #[error("dpi must be finite and positive, got {0}")]
    InvalidDpi(f64),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("{width}x{height} px image exceeds the {max} px side limit")]
    ImageTooLarge { width: f64, height: f64, max: u32 },
    #[error("render failed: {0}")]
    Render(String),
    #[error("viewer failed: {0}")]
    Viewer(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tablefig", version, about = "Render tabular data as a table image")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a dataset and show it, or write it with --out
    Render(RenderArgs),
    /// Print the computed figure and table layout as JSON
    Layout(RenderArgs),
    /// Print the effective configuration as TOML
    ShowConfig {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Default)]
pub struct RenderArgs {
    /// CSV, TSV or JSON dataset
    pub input: PathBuf,
    /// Write the image here instead of opening a viewer
    #[arg(long, short)]
    pub out: Option<PathBuf>,
    /// png or svg; beats the --out extension, which beats the config
    #[arg(long)]
    pub format: Option<String>,
    /// Figure size in inches, e.g. 6x2
    #[arg(long)]
    pub figsize: Option<String>,
    /// Override the figure height in inches
    #[arg(long)]
    pub fig_height: Option<f64>,
    /// Start from the fixed-height preset
    #[arg(long)]
    pub legacy: bool,
    /// Draw the axes frame
    #[arg(long, conflicts_with = "no_frame")]
    pub frame: bool,
    /// Hide the axes frame even if the config enables it
    #[arg(long)]
    pub no_frame: bool,
    /// Axis mode: on, off, equal, scaled, tight, auto, image, square
    #[arg(long)]
    pub axis: Option<String>,
    /// Body cell alignment: left, center, right
    #[arg(long)]
    pub align: Option<String>,
    /// Fixed font size in points
    #[arg(long)]
    pub font_size: Option<f64>,
    /// Table placement: bottom, center, top
    #[arg(long)]
    pub loc: Option<String>,
    /// Use this column as row labels
    #[arg(long)]
    pub index_col: Option<String>,
    #[arg(long)]
    pub dpi: Option<f64>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

use crate::commands::{Commands, RenderArgs};
use crate::output::print_info;
use dataset::DataFrame;
use tablefig_core::options::LEGACY_FIG_HEIGHT;
use tablefig_core::{
    build_figure, make_image_table, ImageFormat, OutputSettings, RecordingBackend, TableError,
    TableOptions, TablefigConfig,
};

/// Options and output settings after command line overrides.
#[derive(Debug)]
pub struct ResolvedRender {
    pub options: TableOptions,
    pub output: OutputSettings,
    /// `--format`, which beats the output file extension.
    pub format: Option<ImageFormat>,
}

pub fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Render(args) => handle_render(&args)?,
        Commands::Layout(args) => handle_layout(&args)?,
        Commands::ShowConfig { config } => {
            let config = TablefigConfig::resolve(config.as_deref())?;
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}

fn handle_render(args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = TablefigConfig::resolve(args.config.as_deref())?;
    let resolved = resolve_options(args, config)?;
    let data = load_dataset(args)?;

    let mut backend = resolved.output.backend(args.out.as_deref(), resolved.format);
    make_image_table(&mut backend, &data, &resolved.options)?;
    if let Some(out) = &args.out {
        print_info(&format!("Wrote {}", out.display()));
    }
    Ok(())
}

fn handle_layout(args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = TablefigConfig::resolve(args.config.as_deref())?;
    let resolved = resolve_options(args, config)?;
    let data = load_dataset(args)?;

    let backend = RecordingBackend::new().with_dpi(resolved.output.dpi);
    let figure = build_figure(&backend, &data, &resolved.options)?;
    println!("{}", serde_json::to_string_pretty(&figure)?);
    Ok(())
}

fn load_dataset(args: &RenderArgs) -> Result<DataFrame, dataset::DatasetError> {
    let mut data = DataFrame::load_from_file(&args.input)?;
    if let Some(column) = &args.index_col {
        data.set_index(column)?;
    }
    log::debug!(
        "loaded {} ({} rows x {} cols)",
        args.input.display(),
        data.n_rows(),
        data.n_cols()
    );
    Ok(data)
}

/// Applies command line overrides on top of the loaded config.
pub fn resolve_options(
    args: &RenderArgs,
    config: TablefigConfig,
) -> Result<ResolvedRender, TableError> {
    let TablefigConfig {
        table: mut options,
        output: mut settings,
    } = config;

    if args.legacy {
        options.fig_height = Some(LEGACY_FIG_HEIGHT);
    }
    if let Some(figsize) = &args.figsize {
        options.figsize = Some(figsize.parse()?);
    }
    if let Some(height) = args.fig_height {
        options.fig_height = Some(height);
    }
    if args.frame {
        options.frame = true;
    }
    if args.no_frame {
        options.frame = false;
    }
    if let Some(axis) = &args.axis {
        options.axis = axis.parse()?;
    }
    if let Some(align) = &args.align {
        options.cell_loc = align.parse()?;
    }
    if let Some(size) = args.font_size {
        options.font_size = Some(size);
    }
    if let Some(loc) = &args.loc {
        options.loc = loc.parse()?;
    }

    if let Some(dpi) = args.dpi {
        settings.dpi = dpi;
    }
    let format = args
        .format
        .as_deref()
        .map(str::parse::<ImageFormat>)
        .transpose()?;
    Ok(ResolvedRender {
        options,
        output: settings,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablefig_core::{AxisMode, CellAlign, FigureSize};

    fn args() -> RenderArgs {
        RenderArgs {
            input: "data.csv".into(),
            ..RenderArgs::default()
        }
    }

    #[test]
    fn no_flags_keeps_config() {
        let mut config = TablefigConfig::default();
        config.table.axis = AxisMode::Tight;
        let resolved = resolve_options(&args(), config.clone()).unwrap();
        assert_eq!(resolved.options, config.table);
        assert_eq!(resolved.output, config.output);
        assert!(resolved.format.is_none());
    }

    #[test]
    fn flags_override_config() {
        let args = RenderArgs {
            figsize: Some("4x2".to_string()),
            frame: true,
            axis: Some("On".to_string()),
            align: Some("right".to_string()),
            font_size: Some(9.0),
            format: Some("svg".to_string()),
            ..args()
        };
        let resolved = resolve_options(&args, TablefigConfig::default()).unwrap();
        let options = &resolved.options;
        assert_eq!(options.figsize, Some(FigureSize::new(4.0, 2.0)));
        assert!(options.frame);
        assert_eq!(options.axis, AxisMode::On);
        assert_eq!(options.cell_loc, CellAlign::Right);
        assert_eq!(options.font_size, Some(9.0));
        assert_eq!(resolved.format, Some(ImageFormat::Svg));
        assert_eq!(resolved.output.format, ImageFormat::Png);
    }

    #[test]
    fn legacy_then_explicit_height() {
        let legacy = RenderArgs {
            legacy: true,
            ..args()
        };
        let resolved = resolve_options(&legacy, TablefigConfig::default()).unwrap();
        assert_eq!(resolved.options, TableOptions::legacy());

        let explicit = RenderArgs {
            fig_height: Some(1.5),
            ..legacy
        };
        let resolved = resolve_options(&explicit, TablefigConfig::default()).unwrap();
        assert_eq!(resolved.options.fig_height, Some(1.5));
    }

    #[test]
    fn no_frame_overrides_config() {
        let mut config = TablefigConfig::default();
        config.table.frame = true;
        let args = RenderArgs {
            no_frame: true,
            ..args()
        };
        let resolved = resolve_options(&args, config).unwrap();
        assert!(!resolved.options.frame);
    }

    #[test]
    fn bad_format_is_reported() {
        let args = RenderArgs {
            format: Some("gif".to_string()),
            ..args()
        };
        assert!(matches!(
            resolve_options(&args, TablefigConfig::default()),
            Err(TableError::InvalidImageFormat(_))
        ));
    }

    #[test]
    fn bad_axis_mode_is_reported() {
        let args = RenderArgs {
            axis: Some("sideways".to_string()),
            ..args()
        };
        assert!(matches!(
            resolve_options(&args, TablefigConfig::default()),
            Err(TableError::InvalidAxisMode(_))
        ));
    }
}

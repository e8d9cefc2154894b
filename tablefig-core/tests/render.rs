use tablefig_core::backend::render::{canvas_size, MAX_CANVAS_PX};
use tablefig_core::{
    build_figure, render_svg_string, AxisMode, Cell, DataFrame, ImageFile, ImageFormat,
    RecordingBackend, TableError, TableOptions,
};

fn frame() -> DataFrame {
    DataFrame::new(
        ["name", "score"],
        vec![
            vec![Cell::from("ada"), Cell::Float(9.0)],
            vec![Cell::from("bob"), Cell::Missing],
        ],
    )
    .unwrap()
}

#[test]
fn svg_contains_cell_text() {
    let figure = build_figure(&RecordingBackend::new(), &frame(), &TableOptions::default()).unwrap();
    let svg = render_svg_string(&figure).unwrap();

    assert!(svg.contains("<svg"));
    for text in ["name", "score", "ada", "9.0", "nan"] {
        assert!(svg.contains(text), "missing {text}");
    }
}

#[test]
fn visible_axis_draws_tick_labels() {
    let count_text = |options: &TableOptions| {
        let figure = build_figure(&RecordingBackend::new(), &frame(), options).unwrap();
        render_svg_string(&figure).unwrap().matches("<text").count()
    };
    let hidden = count_text(&TableOptions::default());
    let shown = count_text(&TableOptions::default().with_axis(AxisMode::On));

    // 2 headers, 2 row labels, 4 body cells
    assert_eq!(hidden, 8);
    // six ticks on each of two axes
    assert_eq!(shown, hidden + 12);
}

#[test]
fn canvas_grows_for_short_figures() {
    let figure = build_figure(
        &RecordingBackend::new(),
        &frame(),
        &TableOptions::legacy().with_figsize(6.0, 1.0),
    )
    .unwrap();
    let (width, height) = canvas_size(&figure).unwrap();
    assert!(width >= 600);
    assert!(height > 10);
}

#[test]
fn oversized_canvas_is_refused() {
    // 700 in at 100 dpi is 70000 px wide
    let options = TableOptions::default().with_figsize(700.0, 1.0);
    let figure = build_figure(&RecordingBackend::new(), &frame(), &options).unwrap();

    assert!(matches!(
        canvas_size(&figure),
        Err(TableError::ImageTooLarge { max, .. }) if max == MAX_CANVAS_PX
    ));
    assert!(matches!(
        render_svg_string(&figure),
        Err(TableError::ImageTooLarge { .. })
    ));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("huge.png");
    let mut backend = ImageFile::new(&path, ImageFormat::Png);
    assert!(matches!(
        tablefig_core::make_image_table(&mut backend, &frame(), &options),
        Err(TableError::ImageTooLarge { .. })
    ));
    assert!(!dir.path().join("nested").exists());
}

#[test]
fn image_file_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("table.svg");
    let mut backend = ImageFile::new(&path, ImageFormat::Svg);
    tablefig_core::make_image_table(&mut backend, &frame(), &TableOptions::default()).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    assert!(data.contains("ada"));
}

#[test]
fn image_format_from_path() {
    assert_eq!(
        ImageFormat::from_path(std::path::Path::new("out.SVG")),
        Some(ImageFormat::Svg)
    );
    assert_eq!(ImageFormat::from_path(std::path::Path::new("out.bin")), None);
}

use tablefig_core::{
    make_image_table, AxisMode, Cell, CellAlign, CellRole, DataFrame, FigureBackend, FigureSize,
    RecordingBackend, TableError, TableOptions,
};

fn small_frame() -> DataFrame {
    DataFrame::new(
        ["x", "y"],
        vec![
            vec![Cell::Int(1), Cell::Float(2.0)],
            vec![Cell::Int(3), Cell::Float(4.5)],
        ],
    )
    .unwrap()
}

struct FailingBackend;

impl FigureBackend for FailingBackend {
    fn show(&mut self, _figure: &tablefig_core::Figure) -> Result<(), TableError> {
        Err(TableError::Render("display unavailable".to_string()))
    }
}

#[test]
fn defaults_show_exactly_one_figure() {
    let mut backend = RecordingBackend::new();
    make_image_table(&mut backend, &small_frame(), &TableOptions::default()).unwrap();

    assert_eq!(backend.figures().len(), 1);
    let figure = backend.last().unwrap();
    assert!(!figure.axes().frame_on());
    assert_eq!(figure.axes().axis_mode(), AxisMode::Off);
    let table = figure.axes().table().unwrap();
    assert_eq!(table.cell_loc(), CellAlign::Center);
    assert!(table.auto_font_size());
}

#[test]
fn frame_and_axis_are_forwarded() {
    let mut backend = RecordingBackend::new();
    let options = TableOptions::default()
        .with_frame(true)
        .with_axis(AxisMode::Tight);
    make_image_table(&mut backend, &small_frame(), &options).unwrap();

    let axes = backend.last().unwrap().axes();
    assert!(axes.frame_on());
    assert_eq!(axes.axis_mode(), AxisMode::Tight);
    assert!(axes.draws_frame());
}

#[test]
fn alignment_and_font_size_are_forwarded() {
    let mut backend = RecordingBackend::new();
    let options = TableOptions::default()
        .with_cell_loc(CellAlign::Right)
        .with_font_size(14.0);
    make_image_table(&mut backend, &small_frame(), &options).unwrap();

    let table = backend.last().unwrap().axes().table().unwrap();
    assert_eq!(table.cell_loc(), CellAlign::Right);
    assert_eq!(table.font_size(), 14.0);
    assert!(!table.auto_font_size());
    assert!(table
        .cells_with_role(CellRole::Body)
        .all(|cell| cell.align == CellAlign::Right));
}

#[test]
fn missing_figsize_uses_backend_default() {
    let mut backend = RecordingBackend::new().with_default_figsize(FigureSize::new(3.0, 1.5));
    make_image_table(&mut backend, &small_frame(), &TableOptions::default()).unwrap();
    assert_eq!(backend.last().unwrap().size(), FigureSize::new(3.0, 1.5));

    let mut backend = RecordingBackend::new();
    make_image_table(&mut backend, &small_frame(), &TableOptions::default()).unwrap();
    assert_eq!(backend.last().unwrap().size(), FigureSize::new(6.4, 4.8));
}

#[test]
fn legacy_preset_overrides_height() {
    let mut backend = RecordingBackend::new();
    let options = TableOptions::legacy().with_figsize(8.0, 3.0);
    make_image_table(&mut backend, &small_frame(), &options).unwrap();

    let figure = backend.last().unwrap();
    assert_eq!(figure.size(), FigureSize::new(8.0, 0.1));
    let table = figure.axes().table().unwrap();
    assert!(!figure.bounds().contains(&table.bbox()));
    assert!(figure.tight_bounds().contains(&table.bbox()));
}

#[test]
fn empty_dataset_renders_header_only() {
    let mut backend = RecordingBackend::new();
    make_image_table(
        &mut backend,
        &DataFrame::empty(["x", "y"]),
        &TableOptions::default(),
    )
    .unwrap();

    let table = backend.last().unwrap().axes().table().unwrap();
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.cells_with_role(CellRole::Header).count(), 2);
    assert_eq!(table.cells_with_role(CellRole::Body).count(), 0);
}

#[test]
fn invalid_options_propagate_unchanged() {
    let mut backend = RecordingBackend::new();
    let options = TableOptions::default().with_figsize(-1.0, 2.0);
    let err = make_image_table(&mut backend, &small_frame(), &options).unwrap_err();
    assert!(matches!(
        err,
        TableError::InvalidFigureSize { width, height } if width == -1.0 && height == 2.0
    ));

    let options = TableOptions::default().with_font_size(f64::NAN);
    let err = make_image_table(&mut backend, &small_frame(), &options).unwrap_err();
    assert!(matches!(err, TableError::InvalidFontSize(_)));

    assert!(backend.figures().is_empty());
}

#[test]
fn backend_errors_propagate_unchanged() {
    let err =
        make_image_table(&mut FailingBackend, &small_frame(), &TableOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "render failed: display unavailable");
}

#[test]
fn repeated_calls_are_independent() {
    let mut backend = RecordingBackend::new();
    make_image_table(
        &mut backend,
        &small_frame(),
        &TableOptions::default().with_frame(true).with_axis(AxisMode::On),
    )
    .unwrap();
    make_image_table(&mut backend, &small_frame(), &TableOptions::default()).unwrap();

    let figures = backend.take();
    assert_eq!(figures.len(), 2);
    assert!(figures[0].axes().frame_on());
    assert_eq!(figures[0].axes().axis_mode(), AxisMode::On);
    assert!(!figures[1].axes().frame_on());
    assert_eq!(figures[1].axes().axis_mode(), AxisMode::Off);
    assert!(backend.figures().is_empty());
}

#[test]
fn boxed_backend_is_accepted() {
    let mut backend: Box<dyn FigureBackend> = Box::new(RecordingBackend::new());
    make_image_table(&mut backend, &small_frame(), &TableOptions::default()).unwrap();
}

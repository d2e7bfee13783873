use rasterpad::draw::{BackingMode, RED, RenderStyle, Scene, ShapeKind, StrokeKind};
use rasterpad::export::{ExportError, ExportFormat, ExportSettings, export_scene};
use rasterpad::util::Point;
use tempfile::TempDir;

fn sample_scene() -> Scene {
    let mut scene = Scene::new(BackingMode::Raster, 160, 120, RenderStyle::default()).unwrap();
    scene.begin_gesture(StrokeKind::Shape(ShapeKind::Rectangle), RED, Point::new(10, 10));
    scene.end_gesture(Point::new(100, 80));
    scene
}

fn settings(dir: &std::path::Path, format: ExportFormat) -> ExportSettings {
    ExportSettings {
        save_directory: dir.to_path_buf(),
        filename_template: "test_%Y%m%d_%H%M%S".to_string(),
        format,
        notify: false,
    }
}

#[test]
fn exports_decode_with_canvas_dimensions() {
    let temp = TempDir::new().unwrap();
    let scene = sample_scene();

    for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Bmp] {
        let dir = temp.path().join(format.extension());
        let path = export_scene(&scene, &settings(&dir, format)).unwrap();

        assert_eq!(
            path.extension().and_then(|e| e.to_str()),
            Some(format.extension())
        );
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (160, 120));
    }
}

#[test]
fn png_export_keeps_stroke_colors() {
    let temp = TempDir::new().unwrap();
    let path = export_scene(&sample_scene(), &settings(temp.path(), ExportFormat::Png)).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.get_pixel(10, 40).0, [255, 0, 0]);
    assert_eq!(decoded.get_pixel(50, 40).0, [255, 255, 255]);
}

#[test]
fn export_into_a_file_path_fails() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    let err = export_scene(&sample_scene(), &settings(&blocker, ExportFormat::Png)).unwrap_err();
    assert!(matches!(err, ExportError::NotADirectory(_)));
}

#[test]
fn saves_with_same_name_do_not_overwrite() {
    let temp = TempDir::new().unwrap();
    let mut fixed = settings(temp.path(), ExportFormat::Png);
    fixed.filename_template = "drawing".to_string();
    let scene = sample_scene();

    let first = export_scene(&scene, &fixed).unwrap();
    let second = export_scene(&scene, &fixed).unwrap();

    assert_ne!(first, second);
    assert_eq!(first.file_name().unwrap(), "drawing.png");
    assert_eq!(second.file_name().unwrap(), "drawing_1.png");
    assert!(first.exists() && second.exists());
}

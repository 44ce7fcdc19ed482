use std::fs;

use draw_shapes::persistence::LINE_SEPARATOR;
use draw_shapes::shape::factory;
use draw_shapes::{Point, Scene, Shape, ShapeColor, ShapeError, ShapeKind};
use tempfile::TempDir;

fn sample_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_shape(factory::create_square(ShapeColor::Green, Point::new(10, 20), 30).unwrap());
    let mut circle = factory::create_circle(ShapeColor::Orange, Point::new(-5, 40), 25).unwrap();
    circle.set_selected(true);
    scene.add_shape(circle);
    scene.add_shape(
        factory::create_rectangle(ShapeColor::Yellow, Point::new(0, 0), 100, 200).unwrap(),
    );
    scene
}

fn lines(records: &[&str]) -> String {
    records
        .iter()
        .map(|r| format!("{}{}", r, LINE_SEPARATOR))
        .collect()
}

#[test]
fn test_save_then_load_reproduces_file() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    let scene = sample_scene();
    scene.save_to_file(&first).unwrap();

    let mut loaded = Scene::new();
    loaded.load_from_file(&first).unwrap();
    loaded.save_to_file(&second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    assert_eq!(loaded.to_text(), scene.to_text());
}

#[test]
fn test_saved_file_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.txt");
    let scene = sample_scene();
    scene.save_to_file(&path).unwrap();

    let expected = lines(&[
        "SQUARE 10 20 30 GREEN false",
        "CIRCLE -5 40 25 ORANGE true",
        "RECTANGLE 0 0 100 200 YELLOW false",
    ]);
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    assert_eq!(scene.to_text(), expected);
}

#[test]
fn test_circle_survives_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("circle.txt");

    let mut scene = Scene::new();
    scene.add_shape(factory::create_circle(ShapeColor::Red, Point::new(50, 50), 100).unwrap());
    scene.save_to_file(&path).unwrap();

    let mut fresh = Scene::new();
    fresh.load_from_file(&path).unwrap();
    assert_eq!(fresh.len(), 1);

    let circle = &fresh.shapes()[0];
    assert_eq!(circle.kind(), ShapeKind::Circle);
    assert_eq!(circle.anchor(), Point::new(50, 50));
    assert_eq!(circle.color(), ShapeColor::Red);
    assert!(!circle.is_selected());
    assert_eq!(circle.to_record(), "CIRCLE 50 50 100 RED false");
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.txt");
    fs::write(&path, "stale content that is much longer than the new scene\n").unwrap();

    let mut scene = Scene::new();
    scene.add_shape(factory::create_square(ShapeColor::Blue, Point::new(1, 2), 3).unwrap());
    scene.save_to_file(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        lines(&["SQUARE 1 2 3 BLUE false"])
    );
}

#[test]
fn test_empty_scene_saves_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    Scene::new().save_to_file(&path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().is_empty());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("scene.txt");
    let err = sample_scene().save_to_file(&path).unwrap_err();
    assert!(matches!(err, ShapeError::Io { .. }));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut scene = sample_scene();

    let err = scene.load_from_file(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, ShapeError::Io { .. }));
    assert!(scene.is_empty());

    // the previous content is one undo away
    assert!(scene.undo());
    assert_eq!(scene.len(), 3);
}

#[test]
fn test_load_malformed_record_leaves_scene_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "SQUARE 1 2 3 RED false\nCIRCLE 1 2 RED false\n").unwrap();

    let mut scene = sample_scene();
    let before = scene.to_text();
    let err = scene.load_from_file(&path).unwrap_err();

    assert!(matches!(err, ShapeError::MalformedRecord { line: 2, .. }));
    assert!(scene.is_empty());

    assert!(scene.undo());
    assert_eq!(scene.to_text(), before);
}

#[test]
fn test_load_unsupported_color() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("purple.txt");
    fs::write(&path, "CIRCLE 1 2 3 PURPLE false\n").unwrap();

    let mut scene = Scene::new();
    let err = scene.load_from_file(&path).unwrap_err();
    assert!(matches!(err, ShapeError::UnsupportedColor(_)));
}

#[test]
fn test_load_skips_unknown_and_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(
        &path,
        "TRIANGLE 1 2 3 RED false\n\nSQUARE 1 2 3 RED TRUE\r\nRECTANGLE 5 6 7 8 GREEN no\n",
    )
    .unwrap();

    let mut scene = Scene::new();
    scene.load_from_file(&path).unwrap();

    assert_eq!(scene.len(), 2);
    assert!(scene.shapes()[0].is_selected());
    assert!(!scene.shapes()[1].is_selected());
    assert_eq!(scene.shapes()[1].to_record(), "RECTANGLE 5 6 7 8 GREEN false");
}

#[test]
fn test_load_records_one_undo_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.txt");
    sample_scene().save_to_file(&path).unwrap();

    let mut scene = Scene::new();
    scene.add_shape(factory::create_square(ShapeColor::Red, Point::new(0, 0), 5).unwrap());
    let before = scene.to_text();
    let depth = scene.undo_depth();

    scene.load_from_file(&path).unwrap();
    assert_eq!(scene.undo_depth(), depth + 1);
    assert_eq!(scene.len(), 3);

    assert!(scene.undo());
    assert_eq!(scene.to_text(), before);
}

#[test]
fn test_loaded_shapes_get_fresh_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.txt");
    let scene = sample_scene();
    scene.save_to_file(&path).unwrap();

    let mut loaded = Scene::new();
    loaded.load_from_file(&path).unwrap();
    for (original, copy) in scene.iter().zip(loaded.iter()) {
        assert_ne!(original.id(), copy.id());
        assert_eq!(original.to_record(), copy.to_record());
    }
}

use icon_tint::{recolor::recolor_file, Color, GradientSpec, RecolorError};
use image::{GrayAlphaImage, LumaA, Rgba, RgbaImage};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_recolor_file_overwrites_in_place() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("ic_launcher_foreground.png");

    let source = RgbaImage::from_fn(16, 16, |x, y| {
        Rgba([200, 10, 10, ((x * 16 + y) % 256) as u8])
    });
    source.save(&path).unwrap();

    recolor_file(&path, &GradientSpec::default()).expect("recolor should succeed");

    let out = image::open(&path).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), source.dimensions());
    for (x, y, pixel) in source.enumerate_pixels() {
        assert_eq!(out.get_pixel(x, y)[3], pixel[3]);
    }
    assert_eq!(out.get_pixel(5, 0).0[..3], [0, 229, 255]);

    // Only the recolored file is left behind
    let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_recolor_file_twice_is_stable() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("icon.png");
    RgbaImage::from_fn(8, 12, |x, _| Rgba([0, 0, 0, (x * 30) as u8]))
        .save(&path)
        .unwrap();

    let spec = GradientSpec::new(Color::new(255, 128, 0), Color::new(0, 64, 255));
    recolor_file(&path, &spec).unwrap();
    let once = fs::read(&path).unwrap();
    recolor_file(&path, &spec).unwrap();
    let twice = fs::read(&path).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_gray_alpha_source_keeps_its_alpha() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("icon.png");
    GrayAlphaImage::from_fn(4, 4, |x, y| LumaA([90, (x * 60 + y) as u8]))
        .save(&path)
        .unwrap();

    recolor_file(&path, &GradientSpec::default()).unwrap();

    let out = image::open(&path).unwrap();
    assert!(out.color().has_alpha());
    let out = out.to_rgba8();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.get_pixel(x, y)[3], (x * 60 + y) as u8);
        }
    }
}

#[test]
fn test_non_image_file_is_a_decode_error_and_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("ic_launcher_foreground.png");
    fs::write(&path, "<vector android:width=\"108dp\"/>").unwrap();

    let err = recolor_file(&path, &GradientSpec::default()).unwrap_err();

    assert!(matches!(err, RecolorError::Decode(_)), "got {err:?}");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<vector android:width=\"108dp\"/>"
    );
}

#[test]
fn test_missing_file_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("nothing.png");

    let err = recolor_file(&path, &GradientSpec::default()).unwrap_err();

    assert!(err.is_not_found());
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_recolor_file_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("ic_launcher_foreground.png");
    RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]))
        .save(&path)
        .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    recolor_file(&path, &GradientSpec::default()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644, "mode after recolor: {mode:o}");
}

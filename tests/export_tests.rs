// Filesystem-facing checks: the three fixed assets, the iconset layout, and
// the missing-output-directory failure mode.

use mine_icon::board;
use mine_icon::constants::canvas::REFERENCE_SIZE;
use mine_icon::constants::export::{ICNS_SOURCE_SIZE, ICO_SIZE};
use mine_icon::export;
use mine_icon::font::DigitFont;
use mine_icon::theme::Theme;
use std::fs;

#[test]
fn default_assets_have_documented_sizes() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path();

    let theme = Theme::default();
    let master = board::render(REFERENCE_SIZE, &theme, &DigitFont::Builtin);

    let png_path = out_dir.join("icon.png");
    let ico_path = out_dir.join("icon.ico");
    let icns_png_path = out_dir.join("icon_1024.png");

    export::save_png(&master, &png_path).unwrap();
    export::save_ico(&master, &ico_path, ICO_SIZE).unwrap();
    export::save_scaled_png(&master, &icns_png_path, ICNS_SOURCE_SIZE).unwrap();

    let png = image::open(&png_path).unwrap();
    assert_eq!((png.width(), png.height()), (512, 512));

    let ico = image::open(&ico_path).unwrap();
    assert_eq!((ico.width(), ico.height()), (256, 256));

    let big = image::open(&icns_png_path).unwrap();
    assert_eq!((big.width(), big.height()), (1024, 1024));
}

#[test]
fn ico_file_carries_the_ico_magic() {
    let tmp = tempfile::tempdir().unwrap();
    let ico_path = tmp.path().join("icon.ico");

    let master = board::render(64, &Theme::default(), &DigitFont::Builtin);
    export::save_ico(&master, &ico_path, 32).unwrap();

    let bytes = fs::read(&ico_path).unwrap();
    assert_eq!(&bytes[..4], &[0, 0, 1, 0]);
}

#[test]
fn missing_output_directory_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("no-such-dir");

    let err = export::ensure_out_dir(&missing).unwrap_err();
    assert!(err.to_string().contains("does not exist"));

    // Nothing was created as a side effect
    assert!(!missing.exists());
}

#[test]
fn existing_output_directory_is_accepted() {
    let tmp = tempfile::tempdir().unwrap();
    export::ensure_out_dir(tmp.path()).unwrap();
}

#[test]
fn iconset_contains_every_size_with_retina_variants() {
    let tmp = tempfile::tempdir().unwrap();
    let theme = Theme::default();
    let font = DigitFont::Builtin;

    let iconset_dir = export::write_iconset(tmp.path(), "icon", &theme, &font).unwrap();
    assert_eq!(iconset_dir.file_name().unwrap(), "icon.iconset");

    let mut names: Vec<String> = fs::read_dir(&iconset_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();

    let mut expected = vec![
        "icon_16x16.png",
        "icon_16x16@2x.png",
        "icon_32x32.png",
        "icon_32x32@2x.png",
        "icon_128x128.png",
        "icon_128x128@2x.png",
        "icon_256x256.png",
        "icon_256x256@2x.png",
        "icon_512x512.png",
        "icon_512x512@2x.png",
    ];
    expected.sort();
    assert_eq!(names, expected);

    // Entries are rendered natively, not resampled
    let small = image::open(iconset_dir.join("icon_16x16.png")).unwrap();
    assert_eq!((small.width(), small.height()), (16, 16));
    let retina = image::open(iconset_dir.join("icon_512x512@2x.png")).unwrap();
    assert_eq!((retina.width(), retina.height()), (1024, 1024));
}

#[test]
fn iconset_is_recreated_on_rerun() {
    let tmp = tempfile::tempdir().unwrap();
    let theme = Theme::default();
    let font = DigitFont::Builtin;

    let iconset_dir = export::write_iconset(tmp.path(), "icon", &theme, &font).unwrap();
    fs::write(iconset_dir.join("stale.png"), b"junk").unwrap();

    let iconset_dir = export::write_iconset(tmp.path(), "icon", &theme, &font).unwrap();
    assert!(!iconset_dir.join("stale.png").exists());
}

#[test]
fn resample_reaches_the_requested_edge() {
    let master = board::render(128, &Theme::default(), &DigitFont::Builtin);
    let up = export::resample(&master, 256);
    assert_eq!((up.width(), up.height()), (256, 256));
    let down = export::resample(&master, 32);
    assert_eq!((down.width(), down.height()), (32, 32));
}

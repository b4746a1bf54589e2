//! QR rendering, saving and per-link option tests

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use linkdeck::api::{LinkEntry, QrPreferences};
use linkdeck::config::QrConfig;
use linkdeck::qr::{ErrorCorrection, QrController, QrRenderOptions, render, render_terminal};

const TARGET: &str = "https://s.example.com/promo";

fn entry(with_logo: bool, subtitle: Option<&str>) -> LinkEntry {
    LinkEntry {
        id: 1,
        short_code: "promo".into(),
        url: "https://example.com/landing".into(),
        description: None,
        enabled: true,
        active_from: None,
        active_until: None,
        qr: QrPreferences {
            with_logo,
            subtitle: subtitle.map(String::from),
        },
        access_count: 0,
        security_level: None,
        created_at: chrono::Utc::now(),
        updated_at: None,
        owner_id: None,
    }
}

fn write_logo(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("logo.png");
    RgbaImage::from_pixel(32, 32, Rgba([200, 0, 0, 255]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn test_render_respects_minimum_size() {
    let rendered = render(TARGET, &QrRenderOptions::default().with_size(300)).unwrap();
    assert!(rendered.width() >= 300);
    assert_eq!(rendered.width(), rendered.height());
    assert_eq!(rendered.target(), TARGET);
    assert!(!rendered.has_caption());
}

#[test]
fn test_empty_target_is_rejected() {
    assert!(render("   ", &QrRenderOptions::default()).is_err());
}

#[test]
fn test_caption_adds_band_below_code() {
    let options = QrRenderOptions::default().with_caption("Spring sale");
    let rendered = render(TARGET, &options).unwrap();
    assert!(rendered.has_caption());
    assert!(rendered.height() > rendered.code_height());
    assert_eq!(rendered.code_height(), rendered.width());
}

#[test]
fn test_logo_is_overlaid_when_readable() {
    let dir = TempDir::new().unwrap();
    let logo = write_logo(&dir);

    let rendered = render(TARGET, &QrRenderOptions::default().with_logo(&logo)).unwrap();
    assert!(rendered.logo_applied());
    let center = rendered.image().get_pixel(rendered.width() / 2, rendered.code_height() / 2);
    assert!(center[0] > 150 && center[1] < 50, "center pixel {:?}", center);
}

#[test]
fn test_missing_logo_degrades_gracefully() {
    let options = QrRenderOptions::default().with_logo("/nonexistent/logo.png");
    let rendered = render(TARGET, &options).unwrap();
    assert!(!rendered.logo_applied());
}

#[test]
fn test_higher_error_correction_needs_more_modules() {
    let low = render_terminal(TARGET, ErrorCorrection::Low, false).unwrap();
    let high = render_terminal(TARGET, ErrorCorrection::High, false).unwrap();
    assert!(high.lines().count() >= low.lines().count());
    assert!(low.lines().count() > 5);
}

#[test]
fn test_options_follow_link_preferences() {
    let dir = TempDir::new().unwrap();
    let logo = write_logo(&dir);
    let config = QrConfig {
        logo_path: Some(logo.display().to_string()),
        ..QrConfig::default()
    };

    let options = QrRenderOptions::for_link(&config, &entry(true, Some("  Promo  ")));
    assert_eq!(options.caption.as_deref(), Some("Promo"));
    assert_eq!(options.logo.as_deref(), Some(logo.as_path()));

    let options = QrRenderOptions::for_link(&config, &entry(false, Some("   ")));
    assert!(options.caption.is_none());
    assert!(options.logo.is_none());
}

#[test]
fn test_controller_saves_png_into_new_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("promo.png");

    let qr = QrController::new(TARGET, QrRenderOptions::default().with_caption("Promo"));
    let saved = qr.save_png(&path).unwrap();
    assert_eq!(saved, path);

    let reopened = image::open(&path).unwrap();
    let rendered = qr.rendered().unwrap();
    assert_eq!(reopened.width(), rendered.width());
    assert_eq!(reopened.height(), rendered.height());
}

#[test]
fn test_controller_rerenders_on_option_changes() {
    let mut qr = QrController::new(TARGET, QrRenderOptions::default());
    let width = qr.rendered().unwrap().width();

    qr.set_size(width * 2);
    assert!(qr.rendered().unwrap().width() >= width * 2);

    qr.cycle_error_correction();
    assert_eq!(qr.options().error_correction, ErrorCorrection::Quartile);
    qr.toggle_quiet_zone();
    assert!(!qr.options().quiet_zone);
    assert_eq!(qr.render_count(), 4);
}

#[test]
fn test_controller_keeps_error_for_unencodable_target() {
    let qr = QrController::new("", QrRenderOptions::default());
    assert!(qr.rendered().is_none());
    assert!(qr.last_error().is_some());

    let dir = TempDir::new().unwrap();
    assert!(qr.save_png(&dir.path().join("x.png")).is_err());
}

//! Integration tests for labels, status colours and the progress colour scale.

mod common;

use siteboard::core::model::{OrganisationRole, OrganisationStatus};
use siteboard::core::{Color, Hsl, progress_color};

use common::*;

#[test]
fn test_progress_color_endpoints() {
    assert_eq!(progress_color(0), Hsl::new(222.0, 80.0, 50.0));
    assert_eq!(progress_color(100), Hsl::new(142.0, 70.0, 45.0));
}

#[test]
fn test_progress_color_midpoint() {
    let mid = progress_color(50);
    assert_close(mid.hue, 182.0);
    assert_close(mid.saturation, 75.0);
    assert_close(mid.lightness, 47.5);
    assert_eq!(mid.to_string(), "hsl(182, 75%, 47.5%)");
}

#[test]
fn test_progress_color_clamps_above_hundred() {
    assert_eq!(progress_color(150), progress_color(100));
    assert_eq!(progress_color(u8::MAX), progress_color(100));
}

#[test]
fn test_progress_color_is_monotonic() {
    let mut previous = progress_color(0);
    for p in 1..=100 {
        let current = progress_color(p);
        assert!(current.hue <= previous.hue);
        assert!(current.saturation <= previous.saturation);
        assert!(current.lightness <= previous.lightness);
        assert!((142.0..=222.0).contains(&current.hue));
        previous = current;
    }
}

#[test]
fn test_hsl_to_rgb() {
    assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Color::from_hex(0xff0000));
    assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Color::from_hex(0x00ff00));
    assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Color::from_hex(0x0000ff));
    assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), Color::from_hex(0xffffff));
}

#[test]
fn test_status_colors() {
    assert_eq!(Status::Active.color().to_hex_string(), "#22c55e");
    assert_eq!(Status::Planning.color().to_hex_string(), "#3b82f6");
    assert_eq!(Status::Hold.color().to_hex_string(), "#eab308");
    assert_eq!(Status::Completed.color().to_hex_string(), "#6b7280");
    assert_eq!(OrganisationStatus::OnHold.color(), Status::Hold.color());
}

#[test]
fn test_hex_string_parsing() -> anyhow::Result<()> {
    assert_eq!(Color::from_hex_string("#22c55e")?, Status::Active.color());
    assert_eq!(Color::from_hex_string("3b82f6")?, Status::Planning.color());
    assert!(Color::from_hex_string("#fff").is_err());
    assert!(Color::from_hex_string("#gggggg").is_err());
    Ok(())
}

#[test]
fn test_labels_round_trip() -> anyhow::Result<()> {
    for &status in Status::ALL {
        assert_eq!(status.label().parse::<Status>()?, status);
    }
    for &category in Category::ALL {
        assert_eq!(category.to_string().parse::<Category>()?, category);
    }
    for &role in OrganisationRole::ALL {
        assert_eq!(role.label().parse::<OrganisationRole>()?, role);
    }
    assert_eq!("on hold".parse::<OrganisationStatus>()?, OrganisationStatus::OnHold);
    assert_eq!("centex".parse::<Category>()?, Category::Centex);
    Ok(())
}

#[test]
fn test_unknown_label_is_an_error() {
    let err = "Paused".parse::<Status>().unwrap_err();
    assert!(err.to_string().contains("Paused"));
}

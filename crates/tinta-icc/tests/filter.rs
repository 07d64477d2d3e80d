//! End-to-end soft-proofing through built-in profiles.

use tinta_color::{delta_e_ok, srgb_to_oklch};
use tinta_core::{DisplayColor, OklchColor};
use tinta_icc::{DeviceSpace, FilterOptions, IccDisplayFilter, Intent, StandardProfile};

fn filter_for(standard: StandardProfile) -> IccDisplayFilter {
    let bytes = standard.to_icc_bytes().unwrap();
    let mut filter = IccDisplayFilter::new();
    assert!(filter.initialize(&bytes), "{standard:?}");
    filter
}

fn lab_grid() -> Vec<(f64, f64, f64)> {
    let mut out = Vec::new();
    for l in (0..=100).step_by(10) {
        for a in (-120..=120).step_by(30) {
            for b in (-120..=120).step_by(30) {
                out.push((f64::from(l), f64::from(a), f64::from(b)));
            }
        }
    }
    out
}

#[test]
fn test_filter_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IccDisplayFilter>();
}

#[test]
fn test_profile_info() {
    let filter = filter_for(StandardProfile::Gray);
    let info = filter.profile_info().unwrap();
    assert_eq!(info.device, DeviceSpace::Gray);
}

#[test]
fn test_gray_collapses_chroma() {
    let filter = filter_for(StandardProfile::Gray);
    for (l, a, b) in lab_grid() {
        let (_, a2, b2) = filter.transform_lab(l, a, b);
        assert!(a2.abs() < 0.5 && b2.abs() < 0.5, "({l}, {a}, {b}) -> ({a2}, {b2})");
    }
}

#[test]
fn test_batch_matches_single() {
    let filter = filter_for(StandardProfile::AdobeRgb);
    let input = lab_grid();
    let batch = filter.transform_lab_batch(&input);

    assert_eq!(batch.len(), input.len());
    for (&(l, a, b), out) in input.iter().zip(&batch) {
        assert_eq!(filter.transform_lab(l, a, b), *out);
    }
}

#[test]
fn test_batch_not_ready_is_identity() {
    let filter = IccDisplayFilter::new();
    let input = lab_grid();
    assert_eq!(filter.transform_lab_batch(&input), input);
}

#[test]
fn test_round_trip_is_idempotent() {
    // A clipped color is in gamut, so a second pass leaves it alone
    let filter = filter_for(StandardProfile::Srgb);
    for (l, a, b) in lab_grid() {
        let once = filter.transform_lab(l, a, b);
        let twice = filter.transform_lab(once.0, once.1, once.2);
        assert!((once.0 - twice.0).abs() < 0.05, "{once:?} vs {twice:?}");
        assert!((once.1 - twice.1).abs() < 0.05, "{once:?} vs {twice:?}");
        assert!((once.2 - twice.2).abs() < 0.05, "{once:?} vs {twice:?}");
    }
}

#[test]
fn test_wide_gamut_keeps_more_chroma() {
    let srgb = filter_for(StandardProfile::Srgb);
    let p3 = filter_for(StandardProfile::DisplayP3);

    // Saturated green sits outside sRGB but inside Display P3
    let vivid = OklchColor::new(0.8, 0.35, 142.0);
    let via_srgb = srgb.filter_oklch(vivid);
    let via_p3 = p3.filter_oklch(vivid);
    assert!(via_p3.chroma > via_srgb.chroma + 0.01, "{via_p3:?} vs {via_srgb:?}");
}

#[test]
fn test_srgb_display_colors_survive() {
    let filter = filter_for(StandardProfile::Srgb);
    for c in [
        DisplayColor::rgb(38, 169, 241),
        DisplayColor::rgb(200, 30, 40),
        DisplayColor::rgb(128, 128, 128),
    ] {
        let out = filter.filter_display_color(c);
        let diff = delta_e_ok(srgb_to_oklch(c), srgb_to_oklch(out));
        assert!(diff < 0.01, "{c} -> {out}: {diff}");
    }
}

#[test]
fn test_options_survive_initialize() {
    let opts = FilterOptions::default()
        .with_intent(Intent::AbsoluteColorimetric)
        .with_black_point_compensation(false);
    let bytes = StandardProfile::Srgb.to_icc_bytes().unwrap();
    let filter = IccDisplayFilter::from_profile_bytes(&bytes, opts).unwrap();
    assert_eq!(filter.options(), opts);
    assert!(filter.is_ready());
}

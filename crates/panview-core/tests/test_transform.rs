use approx::assert_relative_eq;

use panview_core::geometry::Vec2;
use panview_core::transform::{centered_origin, device_to_image, drag_delta, fit, repin_zoom};

// ---------------------------------------------------------------------------
// fit
// ---------------------------------------------------------------------------

#[test]
fn test_fit_small_image_keeps_natural_size() {
    let size = fit(Vec2::new(120.0, 80.0), Vec2::new(400.0, 300.0));
    assert_eq!(size, Vec2::new(120.0, 80.0));
}

#[test]
fn test_fit_exact_size_keeps_natural_size() {
    let size = fit(Vec2::new(400.0, 300.0), Vec2::new(400.0, 300.0));
    assert_eq!(size, Vec2::new(400.0, 300.0));
}

#[test]
fn test_fit_large_image_divides_by_overflow() {
    // Overflow is (1200 - 400) / 400 = 2 on both axes.
    let size = fit(Vec2::new(1200.0, 900.0), Vec2::new(400.0, 300.0));
    assert_relative_eq!(size.x, 600.0);
    assert_relative_eq!(size.y, 450.0);
}

#[test]
fn test_fit_uses_larger_overflow() {
    // Width overflow 4, height overflow 0.
    let size = fit(Vec2::new(2000.0, 300.0), Vec2::new(400.0, 300.0));
    assert_relative_eq!(size.x, 500.0);
    assert_relative_eq!(size.y, 75.0);
}

#[test]
fn test_fit_small_overflow_falls_back_to_natural() {
    // Overflow 0.25 would upscale to 2000x1200, so the natural size wins.
    let size = fit(Vec2::new(500.0, 300.0), Vec2::new(400.0, 300.0));
    assert_eq!(size, Vec2::new(500.0, 300.0));
}

#[test]
fn test_fit_double_size_stays_natural() {
    let size = fit(Vec2::new(800.0, 600.0), Vec2::new(400.0, 300.0));
    assert_eq!(size, Vec2::new(800.0, 600.0));
}

#[test]
fn test_fit_degenerate_viewport_keeps_natural_size() {
    let image = Vec2::new(800.0, 600.0);
    assert_eq!(fit(image, Vec2::new(0.0, 300.0)), image);
    assert_eq!(fit(image, Vec2::new(400.0, -1.0)), image);
    assert_eq!(fit(image, Vec2::new(f64::NAN, 300.0)), image);
}

#[test]
fn test_fit_never_upscales() {
    let dims = [1.0, 37.0, 250.0, 399.0, 400.0, 401.0, 799.0, 800.0, 801.0, 1600.0, 5000.0];
    let viewports = [
        Vec2::new(400.0, 300.0),
        Vec2::new(300.0, 300.0),
        Vec2::new(1024.0, 77.0),
        Vec2::new(1.0, 1.0),
    ];
    for viewport in viewports {
        for &w in &dims {
            for &h in &dims {
                let image = Vec2::new(w, h);
                let size = fit(image, viewport);
                assert!(
                    size.x <= image.x && size.y <= image.y,
                    "fit({image:?}, {viewport:?}) = {size:?} upscales"
                );
                assert!(size.x > 0.0 && size.y > 0.0, "fit produced empty size {size:?}");
            }
        }
    }
}

#[test]
fn test_fit_preserves_aspect_ratio_when_shrinking() {
    let image = Vec2::new(3000.0, 1000.0);
    let size = fit(image, Vec2::new(400.0, 300.0));
    assert!(size.x < image.x);
    assert_relative_eq!(size.x / size.y, 3.0, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// centered_origin
// ---------------------------------------------------------------------------

#[test]
fn test_centered_origin_centers_image() {
    let origin = centered_origin(Vec2::new(400.0, 300.0), Vec2::new(200.0, 100.0));
    assert_eq!(origin, Vec2::new(100.0, 100.0));
}

#[test]
fn test_centered_origin_negative_for_oversized_image() {
    let origin = centered_origin(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
    assert_eq!(origin, Vec2::new(-200.0, -150.0));
}

// ---------------------------------------------------------------------------
// repin_zoom
// ---------------------------------------------------------------------------

#[test]
fn test_repin_zoom_pins_anchor() {
    let zooms = [0.01, 0.25, 0.5, 1.0, 1.5, 3.0, 17.0];
    let pans = [
        Vec2::ZERO,
        Vec2::new(35.0, -12.5),
        Vec2::new(-400.0, 900.0),
    ];
    let anchors = [
        Vec2::ZERO,
        Vec2::new(200.0, 150.0),
        Vec2::new(13.7, 288.1),
    ];

    for &old_zoom in &zooms {
        for &new_zoom in &zooms {
            for &pan in &pans {
                for &anchor in &anchors {
                    let new_pan = repin_zoom(old_zoom, new_zoom, anchor, pan);
                    let before = device_to_image(anchor, pan, old_zoom);
                    let after = device_to_image(anchor, new_pan, new_zoom);
                    assert_relative_eq!(before.x, after.x, epsilon = 1e-9, max_relative = 1e-9);
                    assert_relative_eq!(before.y, after.y, epsilon = 1e-9, max_relative = 1e-9);
                }
            }
        }
    }
}

#[test]
fn test_repin_zoom_viewport_center_scenario() {
    // 800x600 image in a 400x300 viewport, zooming 1 -> 1.5 at the center.
    let anchor = Vec2::new(200.0, 150.0);
    let pan = Vec2::ZERO;
    let new_pan = repin_zoom(1.0, 1.5, anchor, pan);

    let expected = (pan + anchor) / 1.0 * 1.5 - anchor;
    assert_eq!(new_pan, expected);
    assert_relative_eq!(new_pan.x, 100.0);
    assert_relative_eq!(new_pan.y, 75.0);
}

#[test]
fn test_repin_zoom_same_zoom_keeps_pan() {
    let pan = Vec2::new(12.0, -7.0);
    let new_pan = repin_zoom(2.0, 2.0, Vec2::new(50.0, 60.0), pan);
    assert_relative_eq!(new_pan.x, pan.x);
    assert_relative_eq!(new_pan.y, pan.y);
}

#[test]
fn test_repin_zoom_is_deterministic() {
    let args = (1.3, 0.7, Vec2::new(123.4, 56.7), Vec2::new(-8.9, 10.1));
    let a = repin_zoom(args.0, args.1, args.2, args.3);
    let b = repin_zoom(args.0, args.1, args.2, args.3);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
}

// ---------------------------------------------------------------------------
// drag_delta
// ---------------------------------------------------------------------------

#[test]
fn test_drag_delta_sign() {
    // Dragging right and down gives a negative pan, moving content with the pointer.
    let delta = drag_delta(Vec2::new(100.0, 100.0), Vec2::new(130.0, 160.0));
    assert_eq!(delta, Vec2::new(-30.0, -60.0));
}

#[test]
fn test_drag_delta_zero_without_movement() {
    let p = Vec2::new(42.0, 24.0);
    assert_eq!(drag_delta(p, p), Vec2::ZERO);
}

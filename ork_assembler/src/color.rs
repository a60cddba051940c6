//! Deterministic per-object display colors.
//!
//! Objects get a hue spaced evenly around the color wheel by their
//! first-seen index, so the same object keeps the same color for the life
//! of the process and distinct objects stay visually separable.

/// Hue for the object at `index` given `distinct` objects seen so far.
///
/// `distinct` must be at least `index + 1`; callers derive both from the
/// same [`ObjectIndexTable`](crate::ObjectIndexTable).
pub fn object_hue(index: usize, distinct: usize) -> f32 {
    (360.0 / distinct as f32) * index as f32
}

/// Converts HSV to RGB, all channels in [0, 1], hue in degrees [0, 360).
///
/// Six 60-degree linear sectors. For markers rendered on a dark background,
/// back off the saturation to get somewhat lightened colors.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let hprime = h / 60.0;
    let x = c * (1.0 - ((hprime % 2.0) - 1.0).abs());

    let (mut r, mut g, mut b) = (0.0_f32, 0.0_f32, 0.0_f32);

    if hprime < 1.0 {
        r = c;
        g = x;
    } else if hprime < 2.0 {
        r = x;
        g = c;
    } else if hprime < 3.0 {
        g = c;
        b = x;
    } else if hprime < 4.0 {
        g = x;
        b = c;
    } else if hprime < 5.0 {
        r = x;
        b = c;
    } else if hprime < 6.0 {
        r = c;
        b = x;
    }

    let m = v - c;
    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn assert_rgb(actual: (f32, f32, f32), expected: (f32, f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < TOL
                && (actual.1 - expected.1).abs() < TOL
                && (actual.2 - expected.2).abs() < TOL,
            "got {:?}, expected {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_primary_hues() {
        assert_rgb(hsv_to_rgb(0.0, 0.7, 1.0), (1.0, 0.3, 0.3));
        assert_rgb(hsv_to_rgb(120.0, 0.7, 1.0), (0.3, 1.0, 0.3));
        assert_rgb(hsv_to_rgb(240.0, 0.7, 1.0), (0.3, 0.3, 1.0));
    }

    #[test]
    fn test_sector_boundaries() {
        // Yellow and cyan sit on sector edges
        assert_rgb(hsv_to_rgb(60.0, 1.0, 1.0), (1.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(180.0, 1.0, 1.0), (0.0, 1.0, 1.0));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_rgb(hsv_to_rgb(200.0, 0.0, 0.5), (0.5, 0.5, 0.5));
    }

    #[test]
    fn test_object_hue_spacing() {
        assert_eq!(object_hue(0, 3), 0.0);
        assert_eq!(object_hue(1, 3), 120.0);
        assert_eq!(object_hue(2, 3), 240.0);
    }
}

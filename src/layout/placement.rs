// Base placement for the skills cloud ("galaxy" layout).
//
// Each tag gets a base offset from the container center that depends only on
// its index in the visible list:
// 1. Angle advances by the golden angle per index, so no two tags share an angle
// 2. Tags cycle through concentric layers (index mod layer count)
// 3. The circle is squashed into an ellipse to fit wide containers
// 4. A fixed sin/cos jitter breaks up the regular pattern
//
// Properties:
// - Deterministic (no randomness, no hidden state)
// - Stable under appending tags at the tail

use std::f64::consts::PI;

use super::LayoutConfig;
use crate::pointer::PointF;

/// π·(3 − √5), about 137.5 degrees.
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5f64.sqrt())
}

/// Angle of the tag at `index`, in radians (not reduced mod 2π).
pub fn angle(index: usize) -> f64 {
    index as f64 * golden_angle()
}

/// Layer of the tag at `index`. Layer 0 is the outermost.
pub fn layer(index: usize, cfg: &LayoutConfig) -> usize {
    index % cfg.layer_count()
}

/// Distance from the center before elliptical shaping.
///
/// A config without layers places every tag on a single unit layer.
pub fn radius(index: usize, cfg: &LayoutConfig) -> f64 {
    let multiplier = cfg.layer_multipliers.get(layer(index, cfg)).copied().unwrap_or(1.0);
    cfg.base_radius * (cfg.radius_floor + multiplier * cfg.radius_gain)
}

/// Base offset from the container center, without jitter.
pub fn base_position(index: usize, cfg: &LayoutConfig) -> PointF {
    let theta = angle(index);
    let r = radius(index, cfg);
    PointF {
        x: theta.cos() * r * cfg.ellipse_x,
        y: theta.sin() * r * cfg.ellipse_y,
    }
}

/// Reproducible per-index offset added to the final position.
pub fn jitter(index: usize, cfg: &LayoutConfig) -> PointF {
    let t = index as f64 * cfg.jitter_frequency;
    PointF {
        x: t.sin() * cfg.jitter_amplitude,
        y: t.cos() * cfg.jitter_amplitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_golden_angle_value() {
        assert!((golden_angle() - 2.399963229728653).abs() < 1e-12);
    }

    #[test]
    fn test_angles_never_collide() {
        let mut angles: Vec<f64> = (0..1000).map(|i| angle(i).rem_euclid(TAU)).collect();
        angles.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for pair in angles.windows(2) {
            assert!(pair[1] - pair[0] > 1e-6, "angles too close: {:?}", pair);
        }
        // Wrap-around gap between the largest angle and the smallest one.
        let wrap = angles[0] + TAU - angles[angles.len() - 1];
        assert!(wrap > 1e-6);
    }

    #[test]
    fn test_layer_is_periodic() {
        let cfg = LayoutConfig::default();
        for i in 0..300 {
            assert_eq!(layer(i, &cfg), layer(i + 3, &cfg));
        }
        assert_eq!(layer(0, &cfg), 0);
        assert_eq!(layer(1, &cfg), 1);
        assert_eq!(layer(2, &cfg), 2);
    }

    #[test]
    fn test_layers_shrink_inward() {
        let cfg = LayoutConfig::default();
        assert!(radius(0, &cfg) > radius(1, &cfg));
        assert!(radius(1, &cfg) > radius(2, &cfg));
        assert!((radius(0, &cfg) - 220.0).abs() < 1e-9);
        assert!((radius(2, &cfg) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_layers_fall_back_to_unit_layer() {
        let cfg = LayoutConfig { layer_multipliers: vec![], ..LayoutConfig::default() };
        for i in 0..6 {
            assert_eq!(layer(i, &cfg), 0);
            assert!((radius(i, &cfg) - 220.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_tag_sits_on_the_x_axis() {
        let cfg = LayoutConfig::default();
        assert_eq!(angle(0), 0.0);
        let base = base_position(0, &cfg);
        assert!((base.x - 187.0).abs() < 1e-9);
        assert_eq!(base.y, 0.0);
    }

    #[test]
    fn test_base_stays_inside_ellipse() {
        let cfg = LayoutConfig::default();
        for i in 0..100 {
            let base = base_position(i, &cfg);
            assert!(base.x.abs() <= 220.0 * 0.85 + 1e-9);
            assert!(base.y.abs() <= 220.0 * 0.6 + 1e-9);
        }
    }

    #[test]
    fn test_jitter() {
        let cfg = LayoutConfig::default();
        let j0 = jitter(0, &cfg);
        assert_eq!(j0.x, 0.0);
        assert_eq!(j0.y, 15.0);
        let j3 = jitter(3, &cfg);
        assert_eq!(j3.x, (1.5f64).sin() * 15.0);
        assert_eq!(j3.y, (1.5f64).cos() * 15.0);
    }
}

// Pointer repulsion.
//
// Tags within `max_distance` of the pointer are pushed directly away from it.
// The push decays linearly from `max_push` at the pointer to zero at
// `max_distance`.

use super::LayoutConfig;
use crate::pointer::PointF;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Repulsion {
    /// Vector subtracted from the base position.
    pub push: PointF,
    /// Distance from pointer to tag, if there is a pointer.
    pub distance: Option<f64>,
}

impl Repulsion {
    pub const NONE: Repulsion = Repulsion { push: PointF::new(0.0, 0.0), distance: None };
}

/// Push strength at `distance`. Never negative.
pub fn push_factor(distance: f64, cfg: &LayoutConfig) -> f64 {
    (1.0 - distance / cfg.max_distance).max(0.0) * cfg.max_push
}

/// Repulsion acting on a tag at container-absolute `tag`.
///
/// `push` points from the tag towards the pointer, so subtracting it moves the
/// tag away. A pointer exactly on the tag gives zero push.
pub fn repulsion(tag: PointF, pointer: Option<PointF>, cfg: &LayoutConfig) -> Repulsion {
    let Some(pointer) = pointer.filter(PointF::is_finite) else {
        return Repulsion::NONE;
    };

    let dx = pointer.x - tag.x;
    let dy = pointer.y - tag.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance == 0.0 || !distance.is_finite() {
        return Repulsion { push: PointF::new(0.0, 0.0), distance: Some(distance) };
    }

    let factor = push_factor(distance, cfg);
    Repulsion {
        push: PointF::new(dx / distance * factor, dy / distance * factor),
        distance: Some(distance),
    }
}

/// Stacking order: tags close to the pointer render above their neighbours.
pub fn z_index(repulsion: &Repulsion, cfg: &LayoutConfig) -> i32 {
    match repulsion.distance {
        Some(d) if d < cfg.raise_distance => cfg.raised_z,
        _ => cfg.base_z,
    }
}

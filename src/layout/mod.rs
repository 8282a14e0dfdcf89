// Skills cloud layout.
//
// Goals:
// - Pure: output depends only on (index, pointer, level, container, config)
// - Deterministic: identical inputs give bit-identical transforms
// - Never produces NaN transforms
//
// Submodules:
// - placement: golden-angle base positions, layers and jitter
// - repulsion: pointer push and stacking order
//
// Output:
// - One TagPlacement per visible skill, in visible order.

use serde::{Deserialize, Serialize};

use crate::catalog::{Level, Skill};
use crate::error::{CloudError, Result};
use crate::pointer::{PointF, PointerState};

pub mod placement;
pub mod repulsion;

use placement::{base_position, jitter};
use repulsion::{repulsion, z_index};

/// Size of the container the tags are centered in.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SizeF {
    pub w: f64,
    pub h: f64,
}

impl SizeF {
    /// `None` for sizes a host could not have measured (negative or non-finite).
    pub fn new(w: f64, h: f64) -> Option<Self> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        (ok(w) && ok(h)).then_some(Self { w, h })
    }

    pub fn center(&self) -> PointF {
        PointF::new(self.w / 2.0, self.h / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius of the outermost layer before shaping.
    pub base_radius: f64,
    /// One multiplier per layer; tags cycle through them by index.
    pub layer_multipliers: Vec<f64>,
    pub radius_floor: f64,
    pub radius_gain: f64,
    /// Horizontal squash of the circle.
    pub ellipse_x: f64,
    /// Vertical squash of the circle.
    pub ellipse_y: f64,
    pub jitter_amplitude: f64,
    pub jitter_frequency: f64,
    /// Pointer influence ends at this distance.
    pub max_distance: f64,
    /// Push at zero distance.
    pub max_push: f64,
    /// Tags closer than this to the pointer are raised.
    pub raise_distance: f64,
    pub raised_z: i32,
    pub base_z: i32,
    /// Duration hint for the host's transform transition.
    pub transition_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 200.0,
            layer_multipliers: vec![1.0, 0.65, 0.3],
            radius_floor: 0.6,
            radius_gain: 0.5,
            ellipse_x: 0.85,
            ellipse_y: 0.6,
            jitter_amplitude: 15.0,
            jitter_frequency: 0.5,
            max_distance: 200.0,
            max_push: 40.0,
            raise_distance: 50.0,
            raised_z: 10,
            base_z: 1,
            transition_ms: 300,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: LayoutConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn layer_count(&self) -> usize {
        self.layer_multipliers.len().max(1)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(CloudError::InvalidConfig(msg.to_string()));

        let scalars = [
            ("base_radius", self.base_radius),
            ("radius_floor", self.radius_floor),
            ("radius_gain", self.radius_gain),
            ("ellipse_x", self.ellipse_x),
            ("ellipse_y", self.ellipse_y),
            ("jitter_amplitude", self.jitter_amplitude),
            ("jitter_frequency", self.jitter_frequency),
            ("max_distance", self.max_distance),
            ("max_push", self.max_push),
            ("raise_distance", self.raise_distance),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(&format!("{} must be finite", name));
        }
        if self.layer_multipliers.is_empty() {
            return invalid("layer_multipliers must not be empty");
        }
        if self.layer_multipliers.iter().any(|m| !m.is_finite()) {
            return invalid("layer_multipliers must be finite");
        }
        if self.max_distance <= 0.0 {
            return invalid("max_distance must be positive");
        }
        if self.max_push < 0.0 {
            return invalid("max_push must not be negative");
        }
        if self.base_radius < 0.0 {
            return invalid("base_radius must not be negative");
        }
        Ok(())
    }

    /// CSS transition shorthand for tag transforms.
    pub fn transition(&self) -> String {
        format!("transform {}s ease-out", self.transition_ms as f64 / 1000.0)
    }
}

/// Final visual transform of one tag, relative to the container center.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TagTransform {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
    pub z_index: i32,
}

impl TagTransform {
    pub fn css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.dx, self.dy, self.scale)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagPlacement<'a> {
    pub skill: &'a Skill,
    /// Index within the visible list.
    pub index: usize,
    /// `None` when the container has not been measured yet.
    pub transform: Option<TagTransform>,
}

/// Transform for the tag at `index`.
///
/// Returns `None` without a container, mirroring an unmounted view, and for
/// configs that would produce a non-finite position.
pub fn place_tag(
    index: usize,
    level: Level,
    pointer: &PointerState,
    container: Option<SizeF>,
    cfg: &LayoutConfig,
) -> Option<TagTransform> {
    let container = container?;
    let base = base_position(index, cfg);

    // Repulsion measures from the unjittered position.
    let center = container.center();
    let tag = PointF::new(center.x + base.x, center.y + base.y);
    let r = repulsion(tag, pointer.position(), cfg);

    let j = jitter(index, cfg);
    let transform = TagTransform {
        dx: base.x - r.push.x + j.x,
        dy: base.y - r.push.y + j.y,
        scale: level.scale(),
        z_index: z_index(&r, cfg),
    };

    // An unvalidated config can still carry NaN or infinities.
    if !(transform.dx.is_finite() && transform.dy.is_finite()) {
        tracing::debug!(target: "skillcloud.layout", index, "dropping non-finite transform");
        return None;
    }
    Some(transform)
}

/// Lay out every visible skill. `skills` is the already-filtered list.
pub fn layout_cloud<'a>(
    skills: &[&'a Skill],
    pointer: &PointerState,
    container: Option<SizeF>,
    cfg: &LayoutConfig,
) -> Vec<TagPlacement<'a>> {
    let placements: Vec<TagPlacement<'a>> = skills
        .iter()
        .enumerate()
        .map(|(index, &skill)| TagPlacement {
            skill,
            index,
            transform: place_tag(index, skill.level, pointer, container, cfg),
        })
        .collect();

    tracing::debug!(
        target: "skillcloud.layout",
        tags = placements.len(),
        has_pointer = pointer.position().is_some(),
        has_container = container.is_some(),
        "layout pass"
    );
    placements
}

//! JSON document returned to the skills view after each layout pass.
//!
//! Tags come back in visible order with their transform already formatted as
//! CSS, plus the pointer focus for the background gradient.

use serde::Serialize;

use crate::catalog::{Category, Level};
use crate::error::CloudError;
use crate::layout::{LayoutConfig, TagPlacement, TagTransform};
use crate::pointer::{PointF, PointerState};

#[derive(Debug, Clone, Serialize)]
pub struct TransformOutput {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
    pub z_index: i32,
    /// Ready-made CSS `transform` value
    pub css: String,
}

impl From<TagTransform> for TransformOutput {
    fn from(t: TagTransform) -> Self {
        Self { dx: t.dx, dy: t.dy, scale: t.scale, z_index: t.z_index, css: t.css() }
    }
}

/// One visible tag and its style inputs
#[derive(Debug, Clone, Serialize)]
pub struct TagOutput {
    pub name: String,
    pub category: Category,
    pub level: Level,
    /// Colour tier: "primary", "secondary" or "accent"
    pub tier: &'static str,
    /// Position in the visible list
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformOutput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub kind: &'static str,
}

/// Everything the view needs for one render
#[derive(Debug, Clone, Serialize)]
pub struct CloudOutput {
    pub tags: Vec<TagOutput>,
    /// Pointer position, used as the center of the background gradient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<PointF>,
    pub transition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl CloudOutput {
    pub fn from_placements(
        placements: &[TagPlacement<'_>],
        pointer: &PointerState,
        cfg: &LayoutConfig,
    ) -> Self {
        let tags = placements
            .iter()
            .map(|p| TagOutput {
                name: p.skill.name.clone(),
                category: p.skill.category,
                level: p.skill.level,
                tier: p.skill.level.tier(),
                index: p.index,
                transform: p.transform.map(TransformOutput::from),
            })
            .collect();

        Self {
            tags,
            focus: pointer.position(),
            transition: cfg.transition(),
            error: None,
        }
    }

    pub fn from_error(err: &CloudError, cfg: &LayoutConfig) -> Self {
        Self {
            tags: vec![],
            focus: None,
            transition: cfg.transition(),
            error: Some(ErrorInfo { message: err.to_string(), kind: err.kind() }),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{\"tags\": []}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Skill};
    use crate::filter::CategoryFilter;
    use crate::layout::{layout_cloud, SizeF};
    use serde_json::{json, Value};

    #[test]
    fn test_json_shape() {
        let catalog = Catalog::new(vec![Skill::new("Redis", Category::Database, Level::Advanced)]).unwrap();
        let cfg = LayoutConfig::default();
        let visible = CategoryFilter::All.apply(&catalog);
        let pointer = PointerState::new();
        let placements = layout_cloud(&visible, &pointer, SizeF::new(800.0, 500.0), &cfg);

        let value: Value = serde_json::from_str(&CloudOutput::from_placements(&placements, &pointer, &cfg).to_json()).unwrap();
        let tag = &value["tags"][0];
        assert_eq!(tag["name"], json!("Redis"));
        assert_eq!(tag["category"], json!("database"));
        assert_eq!(tag["level"], json!("advanced"));
        assert_eq!(tag["tier"], json!("secondary"));
        assert_eq!(tag["transform"]["z_index"], json!(1));
        assert_eq!(tag["transform"]["scale"], json!(1.0));
        assert!(tag["transform"]["css"].as_str().unwrap().starts_with("translate("));
        assert_eq!(value["transition"], json!("transform 0.3s ease-out"));
        assert!(value.get("focus").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_focus_and_missing_transform() {
        let catalog = Catalog::default();
        let cfg = LayoutConfig::default();
        let visible = CategoryFilter::All.apply(&catalog);
        let pointer = PointerState::at(12.0, 34.0);
        let placements = layout_cloud(&visible, &pointer, None, &cfg);

        let value: Value = serde_json::from_str(&CloudOutput::from_placements(&placements, &pointer, &cfg).to_json()).unwrap();
        assert_eq!(value["focus"], json!({"x": 12.0, "y": 34.0}));
        assert!(value["tags"][0].get("transform").is_none());
    }

    #[test]
    fn test_error_output() {
        let cfg = LayoutConfig::default();
        let err = CloudError::DuplicateSkill("Redis".to_string());
        let value: Value = serde_json::from_str(&CloudOutput::from_error(&err, &cfg).to_json()).unwrap();
        assert_eq!(value["tags"], json!([]));
        assert_eq!(value["error"]["kind"], json!("duplicate_skill"));
        assert_eq!(value["error"]["message"], json!("Duplicate skill 'Redis'"));
    }
}

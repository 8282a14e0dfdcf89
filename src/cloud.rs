//! The skills cloud engine: catalog + active filter + config.
//!
//! Pointer state lives outside the engine so the host can share it with an
//! event listener; it is passed in on every render.

use crate::catalog::{Catalog, Skill};
use crate::error::Result;
use crate::filter::CategoryFilter;
use crate::layout::{layout_cloud, LayoutConfig, SizeF, TagPlacement};
use crate::output::CloudOutput;
use crate::pointer::PointerState;

#[derive(Debug, Clone)]
pub struct SkillCloud {
    catalog: Catalog,
    filter: CategoryFilter,
    config: LayoutConfig,
}

impl SkillCloud {
    pub fn new(catalog: Catalog, config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, filter: CategoryFilter::All, config })
    }

    /// Build from host JSON. Empty strings select the defaults.
    pub fn from_json(catalog_json: &str, config_json: &str) -> Result<Self> {
        let catalog = if catalog_json.trim().is_empty() {
            Catalog::default()
        } else {
            Catalog::from_json(catalog_json)?
        };
        let config = if config_json.trim().is_empty() {
            LayoutConfig::default()
        } else {
            LayoutConfig::from_json(config_json)?
        };
        Self::new(catalog, config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Switch tabs by id. On an unknown id the current filter is kept.
    pub fn set_category(&mut self, id: Option<&str>) -> Result<()> {
        self.filter = CategoryFilter::parse(id)?;
        Ok(())
    }

    pub fn visible(&self) -> Vec<&Skill> {
        self.filter.apply(&self.catalog)
    }

    pub fn layout(&self, pointer: &PointerState, container: Option<SizeF>) -> Vec<TagPlacement<'_>> {
        layout_cloud(&self.visible(), pointer, container, &self.config)
    }

    pub fn render(&self, pointer: &PointerState, container: Option<SizeF>) -> CloudOutput {
        CloudOutput::from_placements(&self.layout(pointer, container), pointer, &self.config)
    }
}

impl Default for SkillCloud {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            filter: CategoryFilter::All,
            config: LayoutConfig::default(),
        }
    }
}

/// Stateless render: parse, filter and lay out in one call.
pub fn render_once(
    catalog_json: &str,
    category: &str,
    pointer: &PointerState,
    container: Option<SizeF>,
) -> Result<CloudOutput> {
    let mut cloud = SkillCloud::from_json(catalog_json, "")?;
    cloud.set_category(Some(category))?;
    Ok(cloud.render(pointer, container))
}

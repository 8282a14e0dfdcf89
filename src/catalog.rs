//! Skill catalog: the fixed list of items the cloud lays out.
//!
//! The catalog is plain configuration. Hosts either use [`Catalog::default`]
//! or hand in their own list as JSON; both go through the same validation.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CloudError, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Mobile,
    Database,
    Devops,
    Other,
}

impl Category {
    /// Tab order.
    pub const ALL: [Category; 6] = [
        Category::Frontend,
        Category::Backend,
        Category::Mobile,
        Category::Database,
        Category::Devops,
        Category::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Mobile => "mobile",
            Category::Database => "database",
            Category::Devops => "devops",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Mobile => "Mobile",
            Category::Database => "Database",
            Category::Devops => "DevOps",
            Category::Other => "Other",
        }
    }

    /// Icon name the front end maps to its icon set.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Frontend => "layout",
            Category::Backend => "server",
            Category::Mobile => "smartphone",
            Category::Database => "database",
            Category::Devops => "zap",
            Category::Other => "code",
        }
    }
}

impl FromStr for Category {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| CloudError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Expert,
    Advanced,
    Intermediate,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Expert, Level::Advanced, Level::Intermediate];

    /// Visual weight of a tag. Exact values; the view relies on them.
    pub fn scale(self) -> f64 {
        match self {
            Level::Expert => 1.2,
            Level::Advanced => 1.0,
            Level::Intermediate => 0.85,
        }
    }

    /// Colour tier used by the stylesheet ("primary", "secondary", "accent").
    pub fn tier(self) -> &'static str {
        match self {
            Level::Expert => "primary",
            Level::Advanced => "secondary",
            Level::Intermediate => "accent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Expert => "Expert",
            Level::Advanced => "Advanced",
            Level::Intermediate => "Intermediate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Level::Expert => "High proficiency",
            Level::Advanced => "Strong knowledge",
            Level::Intermediate => "Working knowledge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: Category,
    pub level: Level,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: Category, level: Level) -> Self {
        Self { name: name.into(), category, level }
    }
}

/// One entry of the category tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// One entry of the proficiency legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub level: Level,
    pub label: &'static str,
    pub description: &'static str,
    pub tier: &'static str,
}

/// Validated, ordered list of skills. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    skills: Vec<Skill>,
}

impl Catalog {
    /// Validate and normalize a skill list. Names are stored trimmed.
    pub fn new(mut skills: Vec<Skill>) -> Result<Self> {
        for skill in &mut skills {
            let trimmed = skill.name.trim();
            if trimmed.len() != skill.name.len() {
                skill.name = trimmed.to_string();
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for (i, skill) in skills.iter().enumerate() {
            let name = skill.name.as_str();
            if name.is_empty() {
                return Err(CloudError::EmptySkillName(i));
            }
            if !seen.insert(name) {
                return Err(CloudError::DuplicateSkill(name.to_string()));
            }
        }
        tracing::debug!(target: "skillcloud.catalog", skills = skills.len(), "catalog loaded");
        Ok(Self { skills })
    }

    /// Parse a JSON array of `{ name, category, level }` records.
    pub fn from_json(json: &str) -> Result<Self> {
        let skills: Vec<Skill> = serde_json::from_str(json)?;
        Self::new(skills)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Tab bar descriptors, "all" first.
    pub fn categories() -> Vec<CategoryTab> {
        let mut tabs = vec![CategoryTab { id: "all", label: "All Skills", icon: "code" }];
        tabs.extend(Category::ALL.iter().map(|c| CategoryTab {
            id: c.id(),
            label: c.label(),
            icon: c.icon(),
        }));
        tabs
    }

    pub fn legend() -> Vec<LegendEntry> {
        Level::ALL
            .iter()
            .map(|&level| LegendEntry {
                level,
                label: level.label(),
                description: level.description(),
                tier: level.tier(),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        use Category::*;
        use Level::*;

        let entries: &[(&str, Category, Level)] = &[
            ("TypeScript", Frontend, Expert),
            ("React", Frontend, Expert),
            ("Next.js", Frontend, Expert),
            ("Vue.js", Frontend, Expert),
            ("Nuxt.js", Frontend, Expert),
            ("Angular", Frontend, Advanced),
            ("HTML/CSS", Frontend, Expert),
            ("Tailwind", Frontend, Expert),
            ("JavaScript", Frontend, Expert),
            ("Bootstrap", Frontend, Expert),
            ("Node.js", Backend, Advanced),
            ("Express", Backend, Advanced),
            ("Fastify", Backend, Advanced),
            ("Nest.js", Backend, Expert),
            ("Laravel", Backend, Advanced),
            ("PHP", Backend, Advanced),
            ("RESTful APIs", Backend, Expert),
            ("GraphQL", Backend, Expert),
            ("React Native", Mobile, Expert),
            ("Kotlin", Mobile, Advanced),
            ("Mobile UX", Mobile, Advanced),
            ("MySQL", Database, Intermediate),
            ("PostgreSQL", Database, Advanced),
            ("MongoDB", Database, Advanced),
            ("Redis", Database, Advanced),
            ("AWS", Devops, Intermediate),
            ("Google Cloud", Devops, Intermediate),
            ("Docker", Devops, Intermediate),
            ("Project Management", Other, Expert),
        ];

        // Built-in names are unique, so this skips validation.
        Self {
            skills: entries
                .iter()
                .map(|&(name, category, level)| Skill::new(name, category, level))
                .collect(),
        }
    }
}

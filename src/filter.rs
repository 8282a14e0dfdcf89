// Category filter.
//
// Runs before layout. The filtered list is what layout indexes into, so
// changing the filter re-indexes every visible tag.

use crate::catalog::{Catalog, Category, Skill};
use crate::error::Result;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a tab id coming from the host. Empty and "all" mean no filter.
    pub fn parse(id: Option<&str>) -> Result<Self> {
        match id.map(str::trim) {
            None | Some("") | Some("all") => Ok(CategoryFilter::All),
            Some(other) => Ok(CategoryFilter::Only(other.parse()?)),
        }
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => skill.category == *c,
        }
    }

    /// Tab id of this filter, as the host names it.
    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.id(),
        }
    }

    /// Visible skills, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Skill> {
        let visible: Vec<&Skill> = catalog.skills().iter().filter(|s| self.matches(s)).collect();
        tracing::debug!(
            target: "skillcloud.filter",
            filter = self.id(),
            visible = visible.len(),
            "category filter applied"
        );
        visible
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Level;
    use crate::error::CloudError;
    use pretty_assertions::assert_eq;

    fn names<'a>(skills: &[&'a Skill]) -> Vec<&'a str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_all_returns_full_catalog() {
        let catalog = Catalog::default();
        let visible = CategoryFilter::All.apply(&catalog);
        let expected: Vec<&Skill> = catalog.skills().iter().collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = Catalog::default();
        let visible = CategoryFilter::Only(Category::Database).apply(&catalog);
        assert_eq!(names(&visible), vec!["MySQL", "PostgreSQL", "MongoDB", "Redis"]);
    }

    #[test]
    fn test_filter_is_exact_subset() {
        let catalog = Catalog::default();
        for category in Category::ALL {
            let visible = CategoryFilter::Only(category).apply(&catalog);
            let expected: Vec<&Skill> =
                catalog.skills().iter().filter(|s| s.category == category).collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn test_no_matches_is_empty() {
        let catalog = Catalog::new(vec![
            Skill::new("TypeScript", Category::Frontend, Level::Expert),
        ])
        .unwrap();
        assert!(CategoryFilter::Only(Category::Mobile).apply(&catalog).is_empty());
    }

    #[test]
    fn test_parse() {
        assert_eq!(CategoryFilter::parse(None).unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("")).unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("all")).unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(Some("backend")).unwrap(),
            CategoryFilter::Only(Category::Backend)
        );
        assert!(matches!(
            CategoryFilter::parse(Some("cloud")),
            Err(CloudError::UnknownCategory(_))
        ));
    }
}

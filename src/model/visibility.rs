//! Visibility set - which registry columns are currently shown

use super::column::{ColumnDescriptor, ColumnRegistry};
use std::collections::HashSet;

/// Result of a visibility toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Shown,
    Hidden,
    /// The id is not declared in the registry; nothing changed
    Unknown,
}

/// Set of column ids currently shown.
///
/// Every member is guaranteed to exist in the registry it was built against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    ids: HashSet<String>,
}

impl VisibilitySet {
    /// Build from `ids`, dropping any that the registry does not declare
    pub fn new<I, S>(ids: I, registry: &ColumnRegistry) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for id in ids {
            let id = id.as_ref();
            if registry.contains(id) {
                set.insert(id.to_string());
            } else {
                log::warn!("Ignoring unknown column '{}' in visible set", id);
            }
        }
        Self { ids: set }
    }

    /// Every registry column visible
    #[cfg(test)]
    pub fn all(registry: &ColumnRegistry) -> Self {
        Self::new(registry.ids(), registry)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Flip membership of `id`. Unknown ids are logged and ignored.
    pub fn toggle(&mut self, id: &str, registry: &ColumnRegistry) -> ToggleOutcome {
        if !registry.contains(id) {
            log::warn!("Toggle requested for unknown column '{}'", id);
            return ToggleOutcome::Unknown;
        }
        if self.ids.remove(id) {
            ToggleOutcome::Hidden
        } else {
            self.ids.insert(id.to_string());
            ToggleOutcome::Shown
        }
    }

    /// Registry columns that are visible, in declaration order
    pub fn project<'a>(&self, registry: &'a ColumnRegistry) -> Vec<&'a ColumnDescriptor> {
        registry
            .columns()
            .iter()
            .filter(|c| self.contains(c.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_ids(set: &VisibilitySet, registry: &ColumnRegistry) -> Vec<&'static str> {
        set.project(registry).iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_new_drops_unknown_ids() {
        let registry = ColumnRegistry::default();
        let set = VisibilitySet::new(["age", "email", "idx"], &registry);
        assert_eq!(set.len(), 2);
        assert!(!set.contains("email"));
    }

    #[test]
    fn test_toggle_flips_membership() {
        let registry = ColumnRegistry::default();
        let mut set = VisibilitySet::all(&registry);
        assert_eq!(set.toggle("visits", &registry), ToggleOutcome::Hidden);
        assert!(!set.contains("visits"));
        assert_eq!(set.toggle("visits", &registry), ToggleOutcome::Shown);
        assert!(set.contains("visits"));
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let registry = ColumnRegistry::default();
        let mut set = VisibilitySet::all(&registry);
        let before = set.clone();
        assert_eq!(set.toggle("nope", &registry), ToggleOutcome::Unknown);
        assert_eq!(set, before);
    }

    #[test]
    fn test_project_keeps_declaration_order() {
        let registry = ColumnRegistry::default();
        let set = VisibilitySet::new(["progress", "idx", "age"], &registry);
        assert_eq!(project_ids(&set, &registry), vec!["idx", "age", "progress"]);
    }
}

//! Role catalog: built-in role definitions plus caller extensions.

use rustc_hash::{FxHashMap, FxHashSet};

use dualmount_core::errors::CatalogError;
use dualmount_core::{Priority, RoleCategory};

use super::types::RoleDefinition;

/// Table of role definitions in declaration order.
///
/// Built-ins are fixed at construction. Callers may add roles and remove the
/// ones they added, never a built-in.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
    index: FxHashMap<String, usize>,
    builtin: FxHashSet<String>,
}

impl RoleCatalog {
    /// Catalog holding the built-in roles.
    pub fn new() -> Self {
        let roles = builtin_roles();
        let builtin = roles.iter().map(|r| r.name.clone()).collect();
        let mut catalog = Self {
            roles,
            index: FxHashMap::default(),
            builtin,
        };
        catalog.reindex();
        catalog
    }

    pub fn get(&self, name: &str) -> Option<&RoleDefinition> {
        self.index.get(name).map(|&i| &self.roles[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtin.contains(name)
    }

    /// All definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter()
    }

    /// Definitions marked required, in declaration order.
    pub fn required_roles(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter().filter(|r| r.required)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Add a caller-defined role after the existing ones.
    pub fn register(&mut self, definition: RoleDefinition) -> Result<(), CatalogError> {
        if definition.name.trim().is_empty() {
            return Err(CatalogError::InvalidDefinition {
                name: definition.name,
                message: "name must not be empty".to_string(),
            });
        }
        if definition.lists_conflict(&definition.name) {
            return Err(CatalogError::InvalidDefinition {
                message: "a role cannot conflict with itself".to_string(),
                name: definition.name,
            });
        }
        if self.contains(&definition.name) {
            return Err(CatalogError::DuplicateRole {
                name: definition.name,
            });
        }
        tracing::debug!(role = %definition.name, "registered custom role");
        self.index.insert(definition.name.clone(), self.roles.len());
        self.roles.push(definition);
        Ok(())
    }

    /// Remove a caller-defined role.
    pub fn remove(&mut self, name: &str) -> Result<RoleDefinition, CatalogError> {
        if self.is_builtin(name) {
            return Err(CatalogError::BuiltinRole {
                name: name.to_string(),
            });
        }
        let position = self
            .index
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownRole {
                name: name.to_string(),
            })?;
        let removed = self.roles.remove(position);
        self.reindex();
        tracing::debug!(role = %name, "removed custom role");
        Ok(removed)
    }

    /// Whether roles `a` and `b` conflict.
    ///
    /// Symmetric mode accepts a listing on either side; otherwise only `a`'s
    /// own list counts. Unknown roles never conflict.
    pub fn conflicts_between(&self, a: &str, b: &str, symmetric: bool) -> bool {
        let forward = self.get(a).is_some_and(|d| d.lists_conflict(b));
        if forward || !symmetric {
            return forward;
        }
        self.get(b).is_some_and(|d| d.lists_conflict(a))
    }

    fn reindex(&mut self) {
        self.index = self
            .roles
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), i))
            .collect();
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in role table.
fn builtin_roles() -> Vec<RoleDefinition> {
    vec![
        RoleDefinition::new(
            "container",
            "Layout container component",
            RoleCategory::Layout,
            Priority::Medium,
        )
        .conflicts_with(&["content"]),
        RoleDefinition::new(
            "content",
            "Content display component",
            RoleCategory::Content,
            Priority::High,
        )
        .required(true)
        .conflicts_with(&["container"]),
        RoleDefinition::new(
            "button",
            "Interactive button component",
            RoleCategory::Interaction,
            Priority::High,
        )
        .conflicts_with(&["link"]),
        RoleDefinition::new(
            "link",
            "Navigation link component",
            RoleCategory::Navigation,
            Priority::High,
        )
        .conflicts_with(&["button"]),
        RoleDefinition::new(
            "input",
            "Form input component",
            RoleCategory::Interaction,
            Priority::High,
        )
        .depends_on(&["label"]),
        RoleDefinition::new(
            "label",
            "Form label component",
            RoleCategory::Content,
            Priority::Medium,
        ),
        RoleDefinition::new(
            "navigation",
            "Navigation component",
            RoleCategory::Navigation,
            Priority::Critical,
        )
        .required(true)
        .auto_assign(false),
        RoleDefinition::new(
            "feedback",
            "User feedback component",
            RoleCategory::Feedback,
            Priority::Medium,
        ),
    ]
}

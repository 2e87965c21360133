//! Owner selection for shared dependencies.

use dedupe_core::workspace::Workspace;
use dedupe_util::errors::DedupeError;

use crate::aggregate::DependencyGroup;

/// Decides which package keeps its copy of a shared dependency.
///
/// The default package wins whenever it holds the dependency. Otherwise the
/// first package, in descriptor order, that the default package depends on
/// and that holds the dependency wins. If neither applies there is no owner.
#[derive(Debug, Clone)]
pub struct OwnerPolicy {
    default: String,
    preferred: Vec<String>,
}

impl OwnerPolicy {
    pub fn new(default: impl Into<String>, preferred: Vec<String>) -> Self {
        Self {
            default: default.into(),
            preferred,
        }
    }

    /// Build the policy from the workspace's default package and its dependencies.
    pub fn from_workspace(workspace: &Workspace) -> Result<Self, DedupeError> {
        let default = workspace.default_package()?;
        let preferred = workspace
            .default_dependencies()?
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();
        Ok(Self::new(default.name(), preferred))
    }

    pub fn default_package(&self) -> &str {
        &self.default
    }

    /// The owning package for `group`, if any.
    pub fn select(&self, group: &DependencyGroup) -> Option<&str> {
        if group.held_by(&self.default) {
            return Some(&self.default);
        }
        self.preferred
            .iter()
            .find(|p| group.held_by(p))
            .map(String::as_str)
    }
}

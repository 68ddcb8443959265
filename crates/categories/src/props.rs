//! Construction inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::CategoryId;

/// Everything a category can be built from. Only `name` is required; the
/// rest falls back to defaults (fresh id, no description, active, now).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProps {
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            category_id: None,
            name: name.into(),
            description: None,
            is_active: None,
            created_at: None,
        }
    }

    pub fn with_id(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Command: CreateCategory.
///
/// The factory input. Ids and timestamps are never caller-supplied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_active: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

impl From<CreateCategory> for CategoryProps {
    fn from(cmd: CreateCategory) -> Self {
        Self {
            category_id: None,
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
            created_at: None,
        }
    }
}

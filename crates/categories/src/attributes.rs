use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_core::DomainResult;

use crate::validation::validate_name;

/// State shared by both category variants.
///
/// Only reachable through the variants, which validate before building one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CategoryAttributes {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) is_active: bool,
    pub(crate) created_at: DateTime<Utc>,
}

impl CategoryAttributes {
    pub(crate) fn with_defaults(
        name: String,
        description: Option<String>,
        is_active: Option<bool>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name,
            description,
            is_active: is_active.unwrap_or(true),
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }

    pub(crate) fn change_name(&mut self, name: String) -> DomainResult<()> {
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub(crate) fn change_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub(crate) fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }
}

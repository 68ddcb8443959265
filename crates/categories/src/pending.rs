//! Categories whose identifier is handed out later (e.g. on first save).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

use crate::attributes::CategoryAttributes;
use crate::category::Category;
use crate::id::CategoryId;
use crate::props::{CategoryProps, CreateCategory};
use crate::validation;

/// Entity: Category without a guaranteed id.
///
/// Behaves like [`Category`] except that `category_id` stays `None` until
/// [`PendingCategory::assign_id`] is called (or an id is passed in explicitly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategoryProps")]
pub struct PendingCategory {
    category_id: Option<CategoryId>,
    #[serde(flatten)]
    attributes: CategoryAttributes,
}

impl PendingCategory {
    pub fn new(props: CategoryProps) -> DomainResult<Self> {
        Self::validate(&props)?;
        let CategoryProps {
            category_id,
            name,
            description,
            is_active,
            created_at,
        } = props;

        Ok(Self {
            category_id,
            attributes: CategoryAttributes::with_defaults(name, description, is_active, created_at),
        })
    }

    pub fn create(cmd: CreateCategory) -> DomainResult<Self> {
        let category = Self::new(cmd.into())?;
        tracing::debug!(name = %category.attributes.name, "pending category created");
        Ok(category)
    }

    pub fn validate(props: &CategoryProps) -> DomainResult<()> {
        validation::validate_props(props)
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn description(&self) -> Option<&str> {
        self.attributes.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.attributes.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.attributes.created_at
    }

    /// Give the category its identity. Ids are write-once.
    pub fn assign_id(&mut self, category_id: CategoryId) -> DomainResult<()> {
        if let Some(existing) = self.category_id {
            return Err(DomainError::invariant(format!(
                "category already has id {existing}"
            )));
        }
        self.category_id = Some(category_id);
        Ok(())
    }

    /// Convert into an identified [`Category`]; fails while no id is assigned.
    pub fn into_identified(self) -> DomainResult<Category> {
        let category_id = self
            .category_id
            .ok_or_else(|| DomainError::invariant("category has no id assigned"))?;
        let CategoryAttributes {
            name,
            description,
            is_active,
            created_at,
        } = self.attributes;

        let mut props = CategoryProps::new(name)
            .with_id(category_id)
            .with_active(is_active)
            .with_created_at(created_at);
        props.description = description;
        Category::new(props)
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.attributes.change_name(name.into())
    }

    pub fn change_description(&mut self, description: Option<String>) {
        self.attributes.change_description(description);
    }

    pub fn activate(&mut self) {
        self.attributes.set_active(true);
    }

    pub fn deactivate(&mut self) {
        self.attributes.set_active(false);
    }
}

impl TryFrom<CategoryProps> for PendingCategory {
    type Error = DomainError;

    fn try_from(props: CategoryProps) -> Result<Self, Self::Error> {
        Self::new(props)
    }
}

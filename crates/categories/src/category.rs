use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity};

use crate::attributes::CategoryAttributes;
use crate::id::CategoryId;
use crate::props::{CategoryProps, CreateCategory};
use crate::validation;

/// Entity: Category (always identified).
///
/// Deserializing goes through [`CategoryProps`], so a stored document is
/// defaulted and validated exactly like a constructor call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategoryProps")]
pub struct Category {
    category_id: CategoryId,
    #[serde(flatten)]
    attributes: CategoryAttributes,
}

impl Category {
    /// Build a category, generating an id if `props` has none.
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
            category_id: category_id.unwrap_or_default(),
            attributes: CategoryAttributes::with_defaults(name, description, is_active, created_at),
        })
    }

    /// Factory: a brand-new category with a fresh id and `created_at = now`.
    pub fn create(cmd: CreateCategory) -> DomainResult<Self> {
        let category = Self::new(cmd.into())?;
        tracing::debug!(
            category_id = %category.category_id,
            name = %category.attributes.name,
            "category created"
        );
        Ok(category)
    }

    /// Validation hook run by [`Category::new`] and [`Category::create`].
    pub fn validate(props: &CategoryProps) -> DomainResult<()> {
        validation::validate_props(props)
    }

    pub fn category_id(&self) -> CategoryId {
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

    /// Rename. An invalid name is rejected and the current one kept.
    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.attributes.change_name(name.into())?;
        tracing::debug!(category_id = %self.category_id, name = %self.attributes.name, "category renamed");
        Ok(())
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

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.category_id
    }
}

impl TryFrom<CategoryProps> for Category {
    type Error = DomainError;

    fn try_from(props: CategoryProps) -> Result<Self, Self::Error> {
        Self::new(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn assert_recent(at: DateTime<Utc>) {
        let age = Utc::now() - at;
        assert!(age >= Duration::zero() && age < Duration::seconds(5), "created_at {at} is not recent");
    }

    #[test]
    fn new_with_only_name_applies_defaults() {
        let category = Category::new(CategoryProps::new("Movie")).unwrap();

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert_recent(category.created_at());
        assert_eq!(category.category_id().as_uuid().get_version_num(), 7);
    }

    #[test]
    fn new_with_all_fields_keeps_given_values() {
        let created_at = Utc::now() - Duration::days(3);
        let category_id = CategoryId::new();
        let category = Category::new(
            CategoryProps::new("Movie")
                .with_id(category_id)
                .with_description("Movie description")
                .with_active(false)
                .with_created_at(created_at),
        )
        .unwrap();

        assert_eq!(category.category_id(), category_id);
        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), Some("Movie description"));
        assert!(!category.is_active());
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn omitted_ids_are_generated_fresh_each_time() {
        let a = Category::new(CategoryProps::new("Movie")).unwrap();
        let b = Category::new(CategoryProps::new("Movie")).unwrap();
        assert_ne!(a.category_id(), b.category_id());
        assert!(!a.same_identity_as(&b));
    }

    #[test]
    fn create_applies_defaults() {
        let category = Category::create(CreateCategory::new("Movie")).unwrap();

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert_recent(category.created_at());
    }

    #[test]
    fn create_with_description_and_inactive_flag() {
        let category = Category::create(
            CreateCategory::new("Movie")
                .with_description("Some description")
                .with_active(false),
        )
        .unwrap();

        assert_eq!(category.description(), Some("Some description"));
        assert!(!category.is_active());
    }

    #[test]
    fn new_and_create_reject_blank_name() {
        let err = Category::new(CategoryProps::new("  ")).unwrap_err();
        assert!(err.is_validation());

        let err = Category::create(CreateCategory::new("")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn change_name_updates_name() {
        let mut category = Category::create(CreateCategory::new("Movie")).unwrap();
        category.change_name("other name").unwrap();
        assert_eq!(category.name(), "other name");
    }

    #[test]
    fn change_name_rejects_invalid_and_keeps_old_name() {
        let mut category = Category::create(CreateCategory::new("Movie")).unwrap();
        let before = category.clone();

        let err = category.change_name("a".repeat(256)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(category, before);
    }

    #[test]
    fn change_description_replaces_and_clears() {
        let mut category =
            Category::create(CreateCategory::new("Movie").with_description("Some description")).unwrap();

        category.change_description(Some("other description".to_string()));
        assert_eq!(category.description(), Some("other description"));

        category.change_description(None);
        assert_eq!(category.description(), None);
    }

    #[test]
    fn activate_and_deactivate_are_idempotent() {
        let mut category = Category::create(CreateCategory::new("Movie").with_active(false)).unwrap();

        category.activate();
        category.activate();
        assert!(category.is_active());

        category.deactivate();
        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn entity_identity_survives_mutation() {
        let original = Category::create(CreateCategory::new("Movie")).unwrap();
        let mut renamed = original.clone();
        renamed.change_name("Series").unwrap();
        renamed.deactivate();

        assert_ne!(original, renamed);
        assert!(original.same_identity_as(&renamed));
        assert_eq!(renamed.id(), &original.category_id());
    }

    #[test]
    fn json_view_uses_flat_snake_case_fields() {
        let created_at = Utc::now();
        let category_id = CategoryId::new();
        let category = Category::new(
            CategoryProps::new("Movie")
                .with_id(category_id)
                .with_created_at(created_at),
        )
        .unwrap();

        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["category_id"], category_id.to_string());
        assert_eq!(json["name"], "Movie");
        assert!(json["description"].is_null());
        assert_eq!(json["is_active"], true);
        assert!(json["created_at"].is_string());

        let back: Category = serde_json::from_value(json).unwrap();
        assert_eq!(back, category);
    }

    #[test]
    fn deserializing_validates_and_defaults() {
        let err = serde_json::from_str::<Category>(r#"{"name": "  "}"#).unwrap_err();
        assert!(err.to_string().contains("name is required"));

        let category: Category = serde_json::from_str(r#"{"name": "Documentary"}"#).unwrap();
        assert!(category.is_active());
        assert_eq!(category.description(), None);
    }

    proptest! {
        #[test]
        fn any_valid_name_is_accepted_and_renamable(
            first in "[A-Za-z0-9][A-Za-z0-9 ]{0,60}",
            second in "[A-Za-z0-9][A-Za-z0-9 ]{0,60}",
        ) {
            let mut category = Category::create(CreateCategory::new(first.clone())).unwrap();
            prop_assert_eq!(category.name(), first.as_str());

            category.change_name(second.clone()).unwrap();
            prop_assert_eq!(category.name(), second.as_str());
        }

        #[test]
        fn toggles_always_land_on_last_call(toggles in prop::collection::vec(any::<bool>(), 1..20)) {
            let mut category = Category::create(CreateCategory::new("Movie")).unwrap();
            for &on in &toggles {
                if on { category.activate() } else { category.deactivate() }
            }
            prop_assert_eq!(category.is_active(), *toggles.last().unwrap());
        }
    }
}

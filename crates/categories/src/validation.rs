//! Field rules shared by both category variants.

use catalog_core::{DomainError, DomainResult};

use crate::props::CategoryProps;

/// Longest accepted category name, counted in `char`s.
pub const NAME_MAX_CHARS: usize = 255;

pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name is required"));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(DomainError::validation(format!(
            "name must be at most {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate a full set of construction props.
pub fn validate_props(props: &CategoryProps) -> DomainResult<()> {
    validate_name(&props.name)
}

//! Categories domain module.
//!
//! This crate contains the catalog's `Category` entity, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Two flavours exist:
//!
//! - [`Category`] always carries a [`CategoryId`], generated when none is given.
//! - [`PendingCategory`] leaves its id unset until one is assigned from outside.

mod attributes;
pub mod category;
pub mod id;
pub mod pending;
pub mod props;
pub mod validation;

pub use category::Category;
pub use id::CategoryId;
pub use pending::PendingCategory;
pub use props::{CategoryProps, CreateCategory};
pub use validation::NAME_MAX_CHARS;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

catalog_core::impl_uuid_newtype!(CategoryId, "CategoryId");

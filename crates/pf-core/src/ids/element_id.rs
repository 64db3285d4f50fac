use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifies one mounted element on the rendering surface.
///
/// The rendering layer picks the value, e.g. a DOM id or card key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl_id!(ElementId);

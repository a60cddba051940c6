//! Plain-payload message types.

use serde::{Deserialize, Serialize};

/// A bare text payload, the equivalent of `std_msgs/String`
///
/// The recognition pipeline uses this to carry the JSON-encoded object-id
/// list alongside the typed pose and marker messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StringMsg {
    pub data: String,
}

impl StringMsg {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

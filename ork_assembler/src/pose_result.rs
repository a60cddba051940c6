//! Input-boundary types consumed by the assembler.
//!
//! These are owned by the upstream recognition stage conceptually; the
//! definitions here are the read-only view the assembler needs.

use std::collections::HashMap;

use nalgebra::{Matrix3, Vector3};

/// Frame context taken from the image message that triggered this cycle
///
/// Only the frame id is needed; absence of the whole image message is
/// modelled as `Option<&ImageContext>` at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageContext {
    /// Reference frame the camera data is expressed in
    pub frame_id: String,
}

impl ImageContext {
    pub fn new(frame_id: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
        }
    }
}

/// A recognized object: identity plus its estimated rigid transform
///
/// Carries an open-ended string attribute map; the assembler reads
/// `mesh_uri` (for mesh markers) and `name` (for text labels).
#[derive(Debug, Clone, PartialEq)]
pub struct PoseResult {
    object_id: String,
    rotation: Matrix3<f64>,
    translation: Vector3<f64>,
    attributes: HashMap<String, String>,
}

impl PoseResult {
    /// Create a pose result from an object id and its estimated transform
    pub fn new(
        object_id: impl Into<String>,
        rotation: Matrix3<f64>,
        translation: Vector3<f64>,
    ) -> Self {
        Self {
            object_id: object_id.into(),
            rotation,
            translation,
            attributes: HashMap::new(),
        }
    }

    /// Attach a string attribute (builder style)
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The opaque object identifier
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// The 3x3 rotation of the estimated transform
    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    /// The translation of the estimated transform
    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }

    /// Look up a string attribute by key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let pr = PoseResult::new("coke_can", Matrix3::identity(), Vector3::zeros())
            .with_attribute("mesh_uri", "package://models/coke.dae")
            .with_attribute("name", "coke can");

        assert_eq!(pr.attribute("mesh_uri"), Some("package://models/coke.dae"));
        assert_eq!(pr.attribute("name"), Some("coke can"));
        assert_eq!(pr.attribute("missing"), None);
    }

    #[test]
    fn test_transform_accessors() {
        let t = Vector3::new(0.1, -0.2, 0.5);
        let pr = PoseResult::new("mug", Matrix3::identity(), t);
        assert_eq!(pr.object_id(), "mug");
        assert_eq!(*pr.translation(), t);
        assert_eq!(*pr.rotation(), Matrix3::identity());
    }
}

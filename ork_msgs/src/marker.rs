//! Visualization marker types for monitoring tools.
//!
//! Mirrors `visualization_msgs/Marker` closely enough that a bridge can
//! forward these to RViz-style viewers. Only the fields the recognition
//! pipeline populates are carried.

use serde::{Deserialize, Serialize};

use crate::geometry::{Pose, Vector3};
use crate::header::{Duration, Header};

/// Color with alpha, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque white, used for text labels
    pub fn opaque_white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

/// Marker shape, with discriminants matching the ROS wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum MarkerType {
    #[default]
    Arrow = 0,
    Cube = 1,
    Sphere = 2,
    Cylinder = 3,
    LineStrip = 4,
    LineList = 5,
    CubeList = 6,
    SphereList = 7,
    Points = 8,
    /// Billboard text that always faces the viewer
    TextViewFacing = 9,
    /// Mesh loaded from a resource URI
    MeshResource = 10,
    TriangleList = 11,
}

/// What the viewer should do with the marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum MarkerAction {
    #[default]
    Add = 0,
    Delete = 2,
    DeleteAll = 3,
}

/// A single visualization primitive positioned in 3D space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Marker {
    /// Frame and stamp, shared with the pose array the marker belongs to
    pub header: Header,
    /// Unique id within the enclosing array
    pub id: i32,
    /// Shape of the marker
    pub marker_type: MarkerType,
    /// Viewer action (always `Add` from this pipeline)
    pub action: MarkerAction,
    /// Where to render the marker
    pub pose: Pose,
    /// Per-axis scale; `z` doubles as text height for text markers
    pub scale: Vector3,
    /// Marker color
    pub color: ColorRgba,
    /// How long the viewer keeps the marker before expiring it
    pub lifetime: Duration,
    /// Mesh URI, only meaningful for `MeshResource` markers
    pub mesh_resource: String,
    /// Label text, only meaningful for `TextViewFacing` markers
    pub text: String,
}

/// Ordered collection of markers published together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MarkerArray {
    pub markers: Vec<Marker>,
}

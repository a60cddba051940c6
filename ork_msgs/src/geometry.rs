//! Geometry message types for object poses.
//!
//! Field-for-field equivalents of `geometry_msgs/{Point,Vector3,Quaternion,
//! Pose,PoseArray}` so a bridge can translate without remapping.

use serde::{Deserialize, Serialize};

use crate::header::Header;

/// A point in 3D space (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A free vector in 3D space, also used for marker scales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Uniform scale vector (s, s, s)
    pub fn uniform(s: f64) -> Self {
        Self { x: s, y: s, z: s }
    }
}

/// Orientation quaternion in (x, y, z, w) order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    /// The identity rotation
    pub fn identity() -> Self {
        Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// A rigid transform: position plus orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

/// A stamped, ordered collection of poses sharing one reference frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PoseArray {
    pub header: Header,
    pub poses: Vec<Pose>,
}

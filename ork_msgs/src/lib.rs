//! # ORK Messages - Outbound schemas with zero pipeline dependencies
//!
//! This is a leaf crate providing the canonical definitions of the messages
//! the recognition pipeline publishes:
//! - [`Header`], [`Time`], [`Duration`] - Stamping and lifetimes
//! - [`Pose`], [`PoseArray`] - Detected object poses
//! - [`Marker`], [`MarkerArray`] - Visualization primitives
//! - [`StringMsg`] - Text payloads (JSON object-id lists)
//!
//! The field layouts mirror their ROS counterparts (`geometry_msgs`,
//! `visualization_msgs`, `std_msgs`) so downstream bridges can translate
//! one-to-one. All types derive serde for transport-agnostic encoding.

pub mod geometry;
pub mod header;
pub mod marker;
pub mod std_msgs;

pub use geometry::{Point, Pose, PoseArray, Quaternion, Vector3};
pub use header::{Duration, Header, Time};
pub use marker::{ColorRgba, Marker, MarkerAction, MarkerArray, MarkerType};
pub use std_msgs::StringMsg;

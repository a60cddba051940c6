//! Timestamps, durations, and the stamped header carried by every message.

use serde::{Deserialize, Serialize};

/// Wall-clock timestamp as seconds + nanoseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Time {
    /// Whole seconds since the epoch
    pub sec: i32,
    /// Nanoseconds past `sec` (0..1_000_000_000)
    pub nanosec: u32,
}

impl Time {
    /// Current wall-clock time
    pub fn now() -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        Time {
            sec: now.as_secs() as i32,
            nanosec: now.subsec_nanos(),
        }
    }
}

/// A span of time, e.g. a marker lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Duration {
    /// Whole seconds
    pub sec: i32,
    /// Nanoseconds past `sec`
    pub nanosec: u32,
}

impl Duration {
    /// Create a duration of whole seconds
    pub fn from_secs(sec: i32) -> Self {
        Self { sec, nanosec: 0 }
    }
}

/// Message header: reference frame plus timestamp
///
/// An empty `frame_id` means the frame is unset; consumers treat it the
/// same way ROS treats an empty `std_msgs/Header` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Header {
    /// Time the data was produced
    pub stamp: Time,
    /// Spatial reference frame the data is expressed in
    pub frame_id: String,
}

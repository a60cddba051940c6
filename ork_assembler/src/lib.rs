//! # ORK Assembler - Recognition result to message formatting
//!
//! Terminal stage of the object-recognition pipeline: takes the detected
//! objects' pose results for one camera frame and fills the three outbound
//! messages — a [`PoseArray`](ork_msgs::PoseArray), a JSON object-id list,
//! and a [`MarkerArray`](ork_msgs::MarkerArray) with one mesh marker and one
//! text label per detection, colored by a stable per-object hue.
//!
//! # Example
//! ```rust,ignore
//! use ork_assembler::{ImageContext, MsgAssembler, PoseResult};
//!
//! let mut assembler = MsgAssembler::new();
//! let image = ImageContext::new("camera_rgb_optical_frame");
//! // pose_results come from the recognition stage upstream
//! let out = assembler.assemble(Some(&image), &pose_results)?;
//! publish(out.pose_array, out.object_ids, out.markers);
//! ```
//!
//! The assembler holds no framework hooks; the host scheduler calls
//! [`MsgAssembler::assemble`] once per trigger and publishes the result.

pub mod assembler;
pub mod color;
pub mod error;
pub mod index;
pub mod pose_result;

pub use assembler::{AssembledMessages, MsgAssembler};
pub use error::{AssemblerError, AssemblerResult};
pub use index::ObjectIndexTable;
pub use pose_result::{ImageContext, PoseResult};

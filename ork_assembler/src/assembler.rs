//! The message-assembly stage itself.

use log::warn;
use nalgebra::{Rotation3, UnitQuaternion};
use serde::Serialize;

use ork_msgs::{
    ColorRgba, Duration, Header, Marker, MarkerAction, MarkerArray, MarkerType, Point, Pose,
    PoseArray, Quaternion, StringMsg, Time, Vector3,
};

use crate::color::{hsv_to_rgb, object_hue};
use crate::error::AssemblerResult;
use crate::index::ObjectIndexTable;
use crate::pose_result::{ImageContext, PoseResult};

/// Saturation backed off from 1.0 so colors read well on dark backgrounds
const MARKER_SATURATION: f32 = 0.7;
const MARKER_VALUE: f32 = 1.0;
const MESH_ALPHA: f32 = 0.75;
const MESH_LIFETIME_SECS: i32 = 30;
const TEXT_LIFETIME_SECS: i32 = 10;
const TEXT_HEIGHT: f64 = 0.03;

#[derive(Serialize)]
struct ObjectIdsPayload<'a> {
    object_ids: Vec<&'a str>,
}

/// The three messages produced for one recognition cycle
#[derive(Debug, Clone, Default)]
pub struct AssembledMessages {
    /// One pose per input result, in input order
    pub pose_array: PoseArray,
    /// JSON payload `{"object_ids": [...]}` in input order
    pub object_ids: StringMsg,
    /// Mesh marker + text label per input result
    pub markers: MarkerArray,
}

/// Fills the outbound recognition messages from pose results
///
/// Owns the [`ObjectIndexTable`] that keeps per-object colors stable across
/// cycles; keep one assembler alive for the life of the pipeline. Mutation
/// goes through `&mut self`, so callers that share an assembler across
/// threads wrap it in their own lock.
#[derive(Debug, Default)]
pub struct MsgAssembler {
    object_index: ObjectIndexTable,
}

impl MsgAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assembler around an existing index table, e.g. one restored
    /// from a previous pipeline run
    pub fn with_index(object_index: ObjectIndexTable) -> Self {
        Self { object_index }
    }

    /// The index table accumulated so far
    pub fn object_index(&self) -> &ObjectIndexTable {
        &self.object_index
    }

    /// Assemble the outbound messages for one cycle, stamped with the
    /// current wall-clock time.
    ///
    /// `image` provides the reference frame when the triggering image
    /// message is available; without it the header frame stays unset.
    /// An empty `pose_results` slice still produces all three messages.
    pub fn assemble(
        &mut self,
        image: Option<&ImageContext>,
        pose_results: &[PoseResult],
    ) -> AssemblerResult<AssembledMessages> {
        self.assemble_at(Time::now(), image, pose_results)
    }

    /// Like [`assemble`](Self::assemble) but with a caller-provided stamp,
    /// for replay tools and deterministic tests.
    pub fn assemble_at(
        &mut self,
        stamp: Time,
        image: Option<&ImageContext>,
        pose_results: &[PoseResult],
    ) -> AssemblerResult<AssembledMessages> {
        let mut header = Header {
            stamp,
            ..Default::default()
        };
        if let Some(image) = image {
            header.frame_id = image.frame_id.clone();
        }

        // Register every id first: the hue denominator is the number of
        // distinct objects seen so far, including the rest of this batch.
        for pose_result in pose_results {
            self.object_index.register(pose_result.object_id());
        }
        let distinct = self.object_index.len();

        let mut pose_array = PoseArray {
            header: header.clone(),
            poses: Vec::with_capacity(pose_results.len()),
        };
        let mut markers = MarkerArray {
            markers: Vec::with_capacity(2 * pose_results.len()),
        };

        for (i, pose_result) in pose_results.iter().enumerate() {
            let pose = pose_from_transform(pose_result);
            let index = self.object_index.register(pose_result.object_id());
            let (r, g, b) = hsv_to_rgb(
                object_hue(index, distinct),
                MARKER_SATURATION,
                MARKER_VALUE,
            );

            let mesh = Marker {
                header: header.clone(),
                id: (2 * i) as i32,
                marker_type: MarkerType::MeshResource,
                action: MarkerAction::Add,
                pose,
                scale: Vector3::uniform(1.0),
                color: ColorRgba::new(r, g, b, MESH_ALPHA),
                lifetime: Duration::from_secs(MESH_LIFETIME_SECS),
                mesh_resource: attribute_or_empty(pose_result, "mesh_uri"),
                text: String::new(),
            };
            let label = Marker {
                id: (2 * i + 1) as i32,
                marker_type: MarkerType::TextViewFacing,
                scale: Vector3::new(1.0, 1.0, TEXT_HEIGHT),
                color: ColorRgba::opaque_white(),
                lifetime: Duration::from_secs(TEXT_LIFETIME_SECS),
                mesh_resource: String::new(),
                text: attribute_or_empty(pose_result, "name"),
                ..mesh.clone()
            };

            pose_array.poses.push(pose);
            markers.markers.push(mesh);
            markers.markers.push(label);
        }

        let payload = ObjectIdsPayload {
            object_ids: pose_results.iter().map(PoseResult::object_id).collect(),
        };
        let object_ids = StringMsg::new(serde_json::to_string(&payload)?);

        Ok(AssembledMessages {
            pose_array,
            object_ids,
            markers,
        })
    }
}

/// Pose message from a pose result's rotation matrix and translation
fn pose_from_transform(pose_result: &PoseResult) -> Pose {
    let rotation = Rotation3::from_matrix_unchecked(*pose_result.rotation());
    let q = UnitQuaternion::from_rotation_matrix(&rotation);
    let t = pose_result.translation();

    Pose {
        position: Point::new(t.x, t.y, t.z),
        orientation: Quaternion {
            x: q.i,
            y: q.j,
            z: q.k,
            w: q.w,
        },
    }
}

fn attribute_or_empty(pose_result: &PoseResult, key: &str) -> String {
    match pose_result.attribute(key) {
        Some(value) => value.to_string(),
        None => {
            warn!(
                "pose result '{}' has no '{}' attribute, defaulting to empty",
                pose_result.object_id(),
                key
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix3, Vector3 as NVector3};

    const TOL: f64 = 1e-6;

    fn result(id: &str) -> PoseResult {
        PoseResult::new(id, Matrix3::identity(), NVector3::new(0.1, 0.2, 0.3))
            .with_attribute("mesh_uri", format!("package://models/{id}.dae"))
            .with_attribute("name", id)
    }

    #[test]
    fn test_identity_rotation_gives_identity_quaternion() {
        let mut assembler = MsgAssembler::new();
        let out = assembler
            .assemble_at(Time::default(), None, &[result("mug")])
            .unwrap();

        let q = out.pose_array.poses[0].orientation;
        assert!(q.x.abs() < TOL && q.y.abs() < TOL && q.z.abs() < TOL);
        assert!((q.w - 1.0).abs() < TOL);
    }

    #[test]
    fn test_half_turn_about_z() {
        let rotation = Matrix3::new(
            -1.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        let pr = PoseResult::new("box", rotation, NVector3::zeros());

        let mut assembler = MsgAssembler::new();
        let out = assembler.assemble_at(Time::default(), None, &[pr]).unwrap();

        let q = out.pose_array.poses[0].orientation;
        assert!(q.x.abs() < TOL && q.y.abs() < TOL);
        assert!((q.z.abs() - 1.0).abs() < TOL, "got {q:?}");
        assert!(q.w.abs() < TOL);
    }

    #[test]
    fn test_position_copies_translation() {
        let mut assembler = MsgAssembler::new();
        let out = assembler
            .assemble_at(Time::default(), None, &[result("mug")])
            .unwrap();

        let p = out.pose_array.poses[0].position;
        assert_eq!((p.x, p.y, p.z), (0.1, 0.2, 0.3));
    }

    #[test]
    fn test_frame_id_from_image_context() {
        let mut assembler = MsgAssembler::new();
        let image = ImageContext::new("camera_link");
        let out = assembler
            .assemble_at(Time::default(), Some(&image), &[result("mug")])
            .unwrap();

        assert_eq!(out.pose_array.header.frame_id, "camera_link");
        assert_eq!(out.markers.markers[0].header.frame_id, "camera_link");
    }

    #[test]
    fn test_frame_id_unset_without_image() {
        let mut assembler = MsgAssembler::new();
        let out = assembler
            .assemble_at(Time::default(), None, &[result("mug")])
            .unwrap();
        assert!(out.pose_array.header.frame_id.is_empty());
    }

    #[test]
    fn test_marker_pairing() {
        let mut assembler = MsgAssembler::new();
        let out = assembler
            .assemble_at(Time::default(), None, &[result("mug"), result("can")])
            .unwrap();

        assert_eq!(out.markers.markers.len(), 4);
        for (i, marker) in out.markers.markers.iter().enumerate() {
            assert_eq!(marker.id, i as i32);
            let expected = if i % 2 == 0 {
                MarkerType::MeshResource
            } else {
                MarkerType::TextViewFacing
            };
            assert_eq!(marker.marker_type, expected);
            assert_eq!(marker.action, MarkerAction::Add);
        }
    }

    #[test]
    fn test_mesh_marker_fields() {
        let mut assembler = MsgAssembler::new();
        let out = assembler
            .assemble_at(Time::default(), None, &[result("mug")])
            .unwrap();

        let mesh = &out.markers.markers[0];
        assert_eq!(mesh.mesh_resource, "package://models/mug.dae");
        assert_eq!(mesh.scale, Vector3::uniform(1.0));
        assert_eq!(mesh.lifetime, Duration::from_secs(30));
        assert!((mesh.color.a - 0.75).abs() < 1e-6);
        assert!(mesh.text.is_empty());
    }

    #[test]
    fn test_text_marker_fields() {
        let mut assembler = MsgAssembler::new();
        let out = assembler
            .assemble_at(Time::default(), None, &[result("mug")])
            .unwrap();

        let label = &out.markers.markers[1];
        assert_eq!(label.text, "mug");
        assert_eq!(label.scale, Vector3::new(1.0, 1.0, 0.03));
        assert_eq!(label.lifetime, Duration::from_secs(10));
        assert_eq!(label.color, ColorRgba::opaque_white());
        assert!(label.mesh_resource.is_empty());
        assert_eq!(label.pose, out.markers.markers[0].pose);
    }

    #[test]
    fn test_missing_attributes_default_to_empty() {
        let pr = PoseResult::new("bare", Matrix3::identity(), NVector3::zeros());
        let mut assembler = MsgAssembler::new();
        let out = assembler.assemble_at(Time::default(), None, &[pr]).unwrap();

        assert!(out.markers.markers[0].mesh_resource.is_empty());
        assert!(out.markers.markers[1].text.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let mut assembler = MsgAssembler::new();
        let out = assembler.assemble_at(Time::default(), None, &[]).unwrap();

        assert!(out.pose_array.poses.is_empty());
        assert!(out.markers.markers.is_empty());
        assert_eq!(out.object_ids.data, "{\"object_ids\":[]}");
    }

    #[test]
    fn test_object_ids_preserve_order_and_duplicates() {
        let mut assembler = MsgAssembler::new();
        let out = assembler
            .assemble_at(
                Time::default(),
                None,
                &[result("mug"), result("can"), result("mug")],
            )
            .unwrap();

        assert_eq!(
            out.object_ids.data,
            "{\"object_ids\":[\"mug\",\"can\",\"mug\"]}"
        );
    }

    #[test]
    fn test_hue_uses_batch_wide_distinct_count() {
        // Two fresh objects in one batch: the first is colored with the
        // denominator already at 2, i.e. hue 0 and hue 180.
        let mut assembler = MsgAssembler::new();
        let out = assembler
            .assemble_at(Time::default(), None, &[result("a"), result("b")])
            .unwrap();

        let first = out.markers.markers[0].color;
        let (r, g, b) = hsv_to_rgb(0.0, MARKER_SATURATION, MARKER_VALUE);
        assert!((first.r - r).abs() < 1e-6);
        assert!((first.g - g).abs() < 1e-6);
        assert!((first.b - b).abs() < 1e-6);

        let second = out.markers.markers[2].color;
        let (r, g, b) = hsv_to_rgb(180.0, MARKER_SATURATION, MARKER_VALUE);
        assert!((second.r - r).abs() < 1e-6);
        assert!((second.g - g).abs() < 1e-6);
        assert!((second.b - b).abs() < 1e-6);
    }
}

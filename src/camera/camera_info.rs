/// CameraInfo - immutable per-frame snapshot of a camera.
///
/// The render loop captures a camera once per frame and hands the snapshot
/// to whatever runs concurrently with the next frame's updates. Matrices are
/// reduced to single precision at capture; the optional world-origin rebase
/// keeps them usable far from the world origin.

use glam::{DMat4, Mat4, Vec3};

use crate::exposure;
use super::camera::Camera;

/// Everything the rendering pipeline needs from a camera for one frame,
/// captured in single precision.
///
/// A snapshot holds plain values and no reference back into the camera:
/// mutating the camera afterwards does not affect snapshots already taken,
/// and snapshots can be cloned and moved across threads freely.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Render projection with scaling/shift and the device depth remap
    /// folded in
    pub projection: Mat4,

    /// Culling projection with scaling/shift folded in, finite far plane,
    /// GL depth
    pub culling_projection: Mat4,

    /// Camera model matrix, rebased when a world origin was given
    pub model: Mat4,

    /// View matrix, the inverse of `model`
    pub view: Mat4,

    /// Distance to the near plane
    pub near: f32,

    /// Distance to the far plane used for culling
    pub culling_far: f32,

    /// Exposure value at ISO 100 for the camera's settings
    pub ev100: f32,

    /// Focal length in meters
    pub focal_length: f32,

    /// Lens opening: focal length over aperture f-number, in meters
    pub aperture_area: f32,

    /// Focus distance clamped to at least the near plane, in meters
    pub focus_distance: f32,

    /// World-space camera position before rebasing, when a world origin
    /// was applied
    pub world_offset: Option<Vec3>,

    /// World-origin matrix folded into `model`, when one was applied
    pub world_origin: Option<Mat4>,
}

impl CameraInfo {
    /// Capture a camera as-is, with no world-origin rebase.
    pub fn new(camera: &Camera) -> Self {
        Self::capture(camera, camera.model_matrix(), None, None)
    }

    /// Capture a camera rebased to `world_origin`.
    ///
    /// The model matrix becomes `world_origin * model` and the view matrix
    /// its inverse. `world_offset` records the camera's world position
    /// before the rebase.
    pub fn with_world_origin(camera: &Camera, world_origin: DMat4) -> Self {
        let model = world_origin * camera.model_matrix();
        Self::capture(
            camera,
            model,
            Some(camera.position().as_vec3()),
            Some(world_origin.as_mat4()),
        )
    }

    fn capture(
        camera: &Camera,
        model: DMat4,
        world_offset: Option<Vec3>,
        world_origin: Option<Mat4>,
    ) -> Self {
        let focal_length = camera.focal_length() as f32;
        Self {
            projection: camera.projection_matrix().as_mat4(),
            culling_projection: camera.culling_projection_matrix().as_mat4(),
            model: model.as_mat4(),
            view: model.inverse().as_mat4(),
            near: camera.near(),
            culling_far: camera.culling_far(),
            ev100: exposure::ev100_from_camera(camera),
            focal_length,
            aperture_area: focal_length / camera.aperture(),
            focus_distance: camera.near().max(camera.focus_distance()),
            world_offset,
            world_origin,
        }
    }
}

#[cfg(test)]
#[path = "camera_info_tests.rs"]
mod tests;

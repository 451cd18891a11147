//! Camera module: projection construction, camera state, frustum, and the
//! per-frame snapshot.
//!
//! The library does NOT store or manage cameras. They are tools owned and
//! driven by the caller; placement goes through the shared transform table
//! the camera was created with.

mod camera;
mod camera_info;
mod frustum;
mod projection;

pub use camera::Camera;
pub use camera_info::CameraInfo;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use projection::{frustum, inverse_projection, ortho, Fov, Projection};

/// Camera - projection, placement and exposure state for a render view.
///
/// The camera keeps its full state in double precision: a render projection
/// whose far plane sits at infinity for perspective paths, a finite-far
/// culling projection next to it, post-projection scaling/shift, and the
/// physical exposure settings of a film camera.
///
/// Placement is indirect: the camera holds an entity key into a shared
/// [`TransformManager`] and never owns its world transform. The view matrix
/// is recomputed from that table on every read.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{DMat4, DVec2, DVec3};

use crate::transform::{Entity, TransformInstance, TransformManager};
use super::frustum::Frustum;
use super::projection::{dmat4_from_rows, Fov, Projection, ProjectionPair};

// Physical ranges for the exposure settings. Values outside are clamped.
const MIN_APERTURE: f32 = 0.5;
const MAX_APERTURE: f32 = 64.0;
const MIN_SHUTTER_SPEED: f32 = 1.0 / 25_000.0;
const MAX_SHUTTER_SPEED: f32 = 60.0;
const MIN_SENSITIVITY: f32 = 10.0;
const MAX_SENSITIVITY: f32 = 204_800.0;

/// Camera for a render view.
///
/// All mutators are total: degenerate projection bounds fall back to a
/// default frustum (with a logged diagnostic) and out-of-range exposure
/// settings are clamped, so no method returns an error or panics.
#[derive(Debug)]
pub struct Camera {
    /// Placement key into the transform table
    entity: Entity,

    /// Transform slot for `entity`, created at construction
    instance: TransformInstance,

    /// Shared world-transform table
    transforms: Rc<RefCell<TransformManager>>,

    /// Render projection, GL conventions, far plane possibly at infinity
    projection: DMat4,

    /// Finite-far projection used for frustum extraction
    projection_for_culling: DMat4,

    /// Post-projection scaling
    scaling: DVec2,

    /// Post-projection translation, in NDC units
    shift: DVec2,

    /// Near/far bookkeeping from the last projection call
    near: f32,
    far: f32,

    // Exposure settings
    aperture: f32,
    shutter_speed: f32,
    sensitivity: f32,
    focus_distance: f32,
}

impl Camera {
    /// Full-frame 35 mm sensor height, in meters.
    ///
    /// Focal lengths and fields of view are converted against this fixed
    /// sensor size.
    pub const SENSOR_SIZE: f64 = 0.024;

    /// Create a camera placed through `entity` in the given transform table.
    ///
    /// A transform slot is created for the entity if it has none yet, so a
    /// fresh camera sits at the world origin. The projection starts as
    /// identity; exposure defaults to f/16, 1/125 s, ISO 100.
    pub fn new(entity: Entity, transforms: Rc<RefCell<TransformManager>>) -> Self {
        let instance = transforms.borrow_mut().get_or_create_instance(entity);
        Self {
            entity,
            instance,
            transforms,
            projection: DMat4::IDENTITY,
            projection_for_culling: DMat4::IDENTITY,
            scaling: DVec2::ONE,
            shift: DVec2::ZERO,
            near: 0.0,
            far: 0.0,
            aperture: 16.0,
            shutter_speed: 1.0 / 125.0,
            sensitivity: 100.0,
            focus_distance: 0.0,
        }
    }

    // ===== PROJECTION =====

    /// Set the projection from a field-of-view angle.
    ///
    /// `fov_in_degrees` is the full angle, measured along `direction`;
    /// `aspect` is width over height. Funnels into [`Self::set_projection`],
    /// including its fallback behavior.
    pub fn set_projection_fov(
        &mut self,
        fov_in_degrees: f64,
        aspect: f64,
        near: f64,
        far: f64,
        direction: Fov,
    ) {
        let s = (fov_in_degrees * 0.5).to_radians().tan() * near;
        let (w, h) = match direction {
            Fov::Vertical => (s * aspect, s),
            Fov::Horizontal => (s, s / aspect),
        };
        self.set_projection(Projection::Perspective, -w, w, -h, h, near, far);
    }

    /// Set the projection from a physical lens focal length, in millimeters.
    ///
    /// The vertical field of view follows from the focal length and the
    /// fixed [`Self::SENSOR_SIZE`] (a 35 mm still frame is 36x24 mm).
    pub fn set_lens_projection(
        &mut self,
        focal_length_in_millimeters: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) {
        let h = (0.5 * near) * ((Self::SENSOR_SIZE * 1000.0) / focal_length_in_millimeters);
        let w = h * aspect;
        self.set_projection(Projection::Perspective, -w, w, -h, h, near, far);
    }

    /// Set the projection from explicit near-plane bounds.
    ///
    /// This is the canonical path every other projection setter funnels
    /// into. Perspective projections store an infinite-far render matrix
    /// next to the finite-far culling matrix; orthographic projections store
    /// the same matrix twice.
    ///
    /// Degenerate bounds (`left == right`, `bottom == top`, a perspective
    /// `near <= 0` or `far <= near`, an orthographic `near == far`) are
    /// replaced by a default frustum of (-0.1, 0.1, -0.1, 0.1) with near 0.1
    /// and far 100, and a diagnostic is logged. The call never fails.
    pub fn set_projection(
        &mut self,
        projection: Projection,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) {
        let pair = ProjectionPair::build(projection, left, right, bottom, top, near, far);
        self.projection = pair.projection;
        self.projection_for_culling = pair.projection_for_culling;
        self.near = pair.near as f32;
        self.far = pair.far as f32;
    }

    /// Set an arbitrary projection, bypassing validation.
    ///
    /// `projection_for_culling` defaults to the render matrix when `None`.
    /// `near` and `far` are bookkeeping only: they are reported by
    /// [`Self::near`] and [`Self::culling_far`] and used when snapshots clamp
    /// the focus distance, but they take no part in the matrices.
    pub fn set_custom_projection(
        &mut self,
        projection: DMat4,
        projection_for_culling: Option<DMat4>,
        near: f64,
        far: f64,
    ) {
        self.projection = projection;
        self.projection_for_culling = projection_for_culling.unwrap_or(projection);
        self.near = near as f32;
        self.far = far as f32;
    }

    /// Render projection handed to the GPU.
    ///
    /// Folds the 2D scaling/shift over the stored projection and remaps GL
    /// depth (-1 at near, +1 at far) to the inverted device range (1 at
    /// near, 0 at an infinite far plane).
    pub fn projection_matrix(&self) -> DMat4 {
        let s = self.scaling;
        let t = self.shift;
        // x/y scaling and shift, z' = -z/2 + w/2
        let remap = dmat4_from_rows([
            [s.x, 0.0, 0.0, t.x],
            [0.0, s.y, 0.0, t.y],
            [0.0, 0.0, -0.5, 0.5],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        remap * self.projection
    }

    /// Projection used for visibility culling.
    ///
    /// Same scaling/shift as [`Self::projection_matrix`] but the far plane
    /// stays finite and the GL depth range is left untouched.
    pub fn culling_projection_matrix(&self) -> DMat4 {
        let s = self.scaling;
        let t = self.shift;
        let remap = dmat4_from_rows([
            [s.x, 0.0, 0.0, t.x],
            [0.0, s.y, 0.0, t.y],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        remap * self.projection_for_culling
    }

    /// Set an additional scaling applied to the projected image.
    pub fn set_scaling(&mut self, scaling: DVec2) {
        self.scaling = scaling;
    }

    /// Additional projection scaling, default (1, 1).
    pub fn scaling(&self) -> DVec2 {
        self.scaling
    }

    /// Set an additional translation applied to the projected image, in NDC
    /// units (a shift of 1.0 moves the image by half the viewport).
    pub fn set_shift(&mut self, shift: DVec2) {
        self.shift = shift;
    }

    /// Additional projection translation, default (0, 0).
    pub fn shift(&self) -> DVec2 {
        self.shift
    }

    /// Distance to the near plane, from the last projection call.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Distance to the far plane used for culling, from the last projection
    /// call. The render projection itself may place the far plane at
    /// infinity.
    pub fn culling_far(&self) -> f32 {
        self.far
    }

    /// Full field-of-view angle of the stored projection, in degrees.
    ///
    /// Recovered from the projection diagonal, so this is only meaningful
    /// for perspective projections.
    pub fn field_of_view_degrees(&self, direction: Fov) -> f64 {
        match direction {
            Fov::Vertical => (2.0 * (1.0 / self.projection.y_axis.y).atan())
                .abs()
                .to_degrees(),
            Fov::Horizontal => (2.0 * (1.0 / self.projection.x_axis.x).atan())
                .abs()
                .to_degrees(),
        }
    }

    // ===== PLACEMENT =====

    /// Placement key this camera was created with.
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Set the camera's world transform (the model matrix).
    ///
    /// Written through the transform table; anything else reading the same
    /// entity sees the new transform.
    pub fn set_model_matrix(&mut self, model_matrix: DMat4) {
        self.transforms
            .borrow_mut()
            .set_transform(self.instance, model_matrix);
    }

    /// Place the camera at `eye`, looking toward `center`, with +Y as the
    /// up reference.
    pub fn look_at(&mut self, eye: DVec3, center: DVec3) {
        self.look_at_with_up(eye, center, DVec3::Y);
    }

    /// Place the camera at `eye`, looking toward `center`.
    ///
    /// Builds a rigid-body model matrix: the translation is `eye`, the basis
    /// derives from the look direction and `up`. An `up` nearly collinear
    /// with the look direction gets its components rotated first so the
    /// basis stays well formed.
    pub fn look_at_with_up(&mut self, eye: DVec3, center: DVec3, up: DVec3) {
        self.set_model_matrix(look_at_model(eye, center, up));
    }

    /// World transform of the camera (camera space to world space).
    ///
    /// Read back from the transform table, so it reflects whatever was last
    /// written for the entity, by this camera or not.
    pub fn model_matrix(&self) -> DMat4 {
        self.transforms
            .borrow()
            .world_transform_accurate(self.instance)
    }

    /// View matrix (world space to camera space): the inverse of the model
    /// matrix, recomputed on every call.
    pub fn view_matrix(&self) -> DMat4 {
        self.model_matrix().inverse()
    }

    /// Camera position in world space.
    pub fn position(&self) -> DVec3 {
        self.model_matrix().w_axis.truncate()
    }

    /// Camera's left vector in world space (normalized first basis column of
    /// the model matrix).
    pub fn left_vector(&self) -> DVec3 {
        self.model_matrix().x_axis.truncate().normalize()
    }

    /// Camera's up vector in world space.
    pub fn up_vector(&self) -> DVec3 {
        self.model_matrix().y_axis.truncate().normalize()
    }

    /// Direction the camera looks toward, in world space. Cameras look down
    /// their -Z axis, so this is the negated third basis column.
    pub fn forward_vector(&self) -> DVec3 {
        (-self.model_matrix().z_axis.truncate()).normalize()
    }

    // ===== CULLING =====

    /// World-space culling frustum: six normalized planes extracted from the
    /// finite-far culling projection combined with the current view matrix.
    pub fn culling_frustum(&self) -> Frustum {
        let view_projection = self.culling_projection_matrix() * self.view_matrix();
        Frustum::from_view_projection(&view_projection.as_mat4())
    }

    // ===== EXPOSURE =====

    /// Set this camera's exposure from physical film-camera settings.
    ///
    /// Arguments outside the physically meaningful ranges are clamped:
    /// aperture to [0.5, 64] f-stops, shutter speed to [1/25000, 60]
    /// seconds, sensitivity to [10, 204800] ISO.
    pub fn set_exposure(&mut self, aperture: f32, shutter_speed: f32, sensitivity: f32) {
        self.aperture = aperture.clamp(MIN_APERTURE, MAX_APERTURE);
        self.shutter_speed = shutter_speed.clamp(MIN_SHUTTER_SPEED, MAX_SHUTTER_SPEED);
        self.sensitivity = sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
    }

    /// Aperture in f-stops, default f/16.
    pub fn aperture(&self) -> f32 {
        self.aperture
    }

    /// Shutter speed in seconds, default 1/125 s.
    pub fn shutter_speed(&self) -> f32 {
        self.shutter_speed
    }

    /// Sensitivity in ISO, default 100.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Set the distance from the camera to the focus plane, in world units.
    ///
    /// Stored as given. Per-frame snapshots clamp it to at least the near
    /// plane when captured; this setter and its getter keep the raw value.
    pub fn set_focus_distance(&mut self, distance: f32) {
        self.focus_distance = distance;
    }

    /// Focus distance as set, unclamped.
    pub fn focus_distance(&self) -> f32 {
        self.focus_distance
    }

    /// Focal length of the stored perspective projection, in meters.
    pub fn focal_length(&self) -> f64 {
        Self::SENSOR_SIZE * self.projection.y_axis.y * 0.5
    }

    /// Focal length needed to keep a subject at `focus_distance` in focus
    /// while preserving the framing of a lens of the given nominal
    /// `focal_length`. Both distances are in meters; `focus_distance` is
    /// raised to at least `focal_length` first.
    pub fn compute_effective_focal_length(focal_length: f64, mut focus_distance: f64) -> f64 {
        focus_distance = focus_distance.max(focal_length);
        (focus_distance * focal_length) / (focus_distance - focal_length)
    }

    /// Field of view a lens focused at `focus_distance` (meters) effectively
    /// covers, accounting for focus breathing. `fov_in_degrees` is the
    /// nominal full angle; the result is in degrees.
    pub fn compute_effective_fov(fov_in_degrees: f64, mut focus_distance: f64) -> f64 {
        let f = 0.5 * Self::SENSOR_SIZE / (fov_in_degrees * 0.5).to_radians().tan();
        focus_distance = focus_distance.max(f);
        let fov =
            2.0 * ((Self::SENSOR_SIZE * (focus_distance - f)) / (2.0 * focus_distance * f)).atan();
        fov.to_degrees()
    }
}

/// Model matrix (camera to world) for a viewer at `eye` looking toward
/// `center`: the inverse of the usual look-at view matrix, built directly.
fn look_at_model(eye: DVec3, center: DVec3, up: DVec3) -> DMat4 {
    let z = (center - eye).normalize();
    let mut u = up.normalize();
    // Degenerate up: looking straight along it. Rotate the components to
    // recover a usable reference vector.
    if z.dot(u).abs() > 0.999 {
        u = DVec3::new(u.z, u.x, u.y);
    }
    let x = z.cross(u).normalize();
    let y = x.cross(z);
    DMat4::from_cols(x.extend(0.0), y.extend(0.0), (-z).extend(0.0), eye.extend(1.0))
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

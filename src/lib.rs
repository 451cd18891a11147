/*!
# Nebula 3D Camera

Camera projection and view-transform subsystem for a real-time 3D renderer.

The full camera model is kept in double precision; the rendering pipeline
receives reduced-precision per-frame snapshots.

## Architecture

- **Camera**: projection pair (infinite-far render matrix next to a
  finite-far culling matrix), post-projection scaling/shift, physical
  exposure settings, placement through a shared transform table
- **TransformManager**: entity-keyed world-transform storage
- **Frustum**: six culling planes extracted from a view-projection matrix
- **CameraInfo**: immutable single-precision snapshot taken once per frame
- **exposure**: EV100 and photometric conversions

## Example

```
use std::cell::RefCell;
use std::rc::Rc;

use nebula_3d_camera::nebula3d::{Camera, CameraInfo, Entity, Fov, TransformManager};
use nebula_3d_camera::glam::DVec3;

let transforms = Rc::new(RefCell::new(TransformManager::new()));
let mut camera = Camera::new(Entity::new(1), Rc::clone(&transforms));

camera.set_projection_fov(60.0, 16.0 / 9.0, 0.1, 1000.0, Fov::Vertical);
camera.look_at(DVec3::new(0.0, 2.0, 5.0), DVec3::ZERO);
camera.set_exposure(16.0, 1.0 / 125.0, 100.0);

let frame = CameraInfo::new(&camera);
assert_eq!(frame.near, 0.1);
```
*/

// Internal modules
pub mod camera;
pub mod exposure;
pub mod log;
pub mod transform;

// Main nebula3d namespace module
pub mod nebula3d {
    // Camera, projection and snapshot types
    pub use crate::camera::{
        frustum, inverse_projection, ortho, Camera, CameraInfo, Fov, Frustum, Projection,
        PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
    };

    // Transform table
    pub use crate::transform::{Entity, TransformInstance, TransformManager};

    // Logging sub-module (types and global logger control only)
    pub mod log {
        pub use crate::log::{
            log, log_detailed, reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity,
            Logger,
        };
        // Note: the nebula_* macros are exported at the crate root by
        // #[macro_export], not from here.
    }

    // Exposure sub-module
    pub mod exposure {
        pub use crate::exposure::*;
    }
}

// Re-export math library at crate root
pub use glam;

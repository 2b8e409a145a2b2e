//! Fixed perspective camera and scene lighting

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera placement looking at the origin from the front-right
pub const CAMERA_EYE: Vec3 = Vec3::new(4.61, 2.74, 8.0);
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

/// Directional light position (shines toward the origin)
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 3.0, 1.0);
pub const AMBIENT: f32 = 0.5;

/// Combined view-projection matrix for a viewport aspect ratio
pub fn view_proj(aspect: f32) -> Mat4 {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    let proj = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
    let view = Mat4::look_at_rh(CAMERA_EYE, Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Per-frame uniforms (must match shader.wgsl)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = direction toward the light, w = ambient
    pub light: [f32; 4],
}

impl CameraUniform {
    pub fn new(aspect: f32) -> Self {
        let to_light = LIGHT_POSITION.normalize();
        Self {
            view_proj: view_proj(aspect).to_cols_array_2d(),
            light: [to_light.x, to_light.y, to_light.z, AMBIENT],
        }
    }
}

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera for the 3D scene. Right-handed, looking down -Z by default.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Unit view direction.
    pub look_dir: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera. Layout matches `CameraUniform` in WGSL.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = eye position, w = 1.
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl PerspectiveCamera {
    pub fn new(position: Vec3, fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            look_dir: Vec3::NEG_Z,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.look_dir, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }

    /// Update the aspect ratio after a window resize. Zero-height viewports are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Aim the camera down -Z, tilted by `offset` (pointer parallax).
    pub fn look_with_offset(&mut self, offset: Vec2) {
        self.look_dir = Vec3::new(offset.x, offset.y, -1.0).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Vec3::new(0.0, 0.0, 50.0), 75.0, 16.0 / 9.0, 0.1, 2000.0)
    }

    #[test]
    fn point_ahead_projects_to_center() {
        let cam = camera();
        let clip = cam.view_proj() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn point_behind_is_clipped() {
        let cam = camera();
        let clip = cam.view_proj() * Vec3::new(0.0, 0.0, 60.0).extend(1.0);
        assert!(clip.w < 0.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = camera();
        cam.set_viewport(1000.0, 500.0);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
        cam.set_viewport(1000.0, 0.0);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn parallax_tilts_without_moving() {
        let mut cam = camera();
        cam.look_with_offset(Vec2::new(0.3, -0.3));
        assert!((cam.look_dir.length() - 1.0).abs() < 1e-6);
        assert!(cam.look_dir.x > 0.0 && cam.look_dir.y < 0.0 && cam.look_dir.z < 0.0);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn uniform_carries_eye_position() {
        let u = camera().uniform();
        assert_eq!(u.position, [0.0, 0.0, 50.0, 1.0]);
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }
}

use glam::{Mat4, Vec3};

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Fixed perspective camera.
///
/// Z-up right-handed, matching the demo's world: by default the eye sits at
/// the origin looking down +Y, so a planet placed at (0, 10, 0) fills the
/// view.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::new(0.0, 10.0, 0.0),
            up: Vec3::Z,
            fov_y_degrees: 45.0,
            aspect,
            z_near: 0.1,
            z_far: 100.0,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.position, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.z_near,
            self.z_far,
        );
        proj * view
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = Camera::new(4.0 / 3.0);
        let clip = camera.view_proj().project_point3(camera.target);

        assert!(clip.x.abs() < 1e-4);
        assert!(clip.y.abs() < 1e-4);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn test_point_behind_camera_leaves_clip_range() {
        let camera = Camera::new(1.0);
        let clip = camera
            .view_proj()
            .project_point3(Vec3::new(0.0, -10.0, 0.0));

        assert!(!(0.0..=1.0).contains(&clip.z));
    }

    #[test]
    fn test_point_above_target_moves_up_in_clip_space() {
        let camera = Camera::new(1.0);
        let above = camera.target + Vec3::new(0.0, 0.0, 2.0);
        let clip = camera.view_proj().project_point3(above);

        assert!(clip.y > 0.0);
    }

    #[test]
    fn test_set_aspect_ignores_zero_dimensions() {
        let mut camera = Camera::new(2.0);
        camera.set_aspect(0, 600);
        assert_eq!(camera.aspect, 2.0);
        camera.set_aspect(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }
}

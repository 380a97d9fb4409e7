use glam::{EulerRot, Mat4, Quat, Vec3};

/// Model transform with the engine-style position / HPR / scale interface.
///
/// HPR angles are in degrees, Z-up: heading rotates about +Z, pitch about
/// +X, roll about +Y, applied in that order. A sphere from
/// [`crate::sphere::create_uv_sphere`] has its poles on the Z axis, so
/// heading spins it around its polar axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub hpr: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        hpr: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn set_pos(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
    }

    pub fn set_hpr(&mut self, heading: f32, pitch: f32, roll: f32) {
        self.hpr = Vec3::new(heading, pitch, roll);
    }

    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.scale = Vec3::new(x, y, z);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::ZXY,
            self.hpr.x.to_radians(),
            self.hpr.y.to_radians(),
            self.hpr.z.to_radians(),
        )
    }

    /// Model matrix: translation * rotation * scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation(), self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

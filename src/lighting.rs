use glam::{EulerRot, Quat, Vec3};

/// Directional light with an HPR orientation, engine style: the light shines
/// along its forward axis (+Y rotated by heading/pitch/roll in degrees), so
/// `hpr = (0, -60, 0)` tilts it 60 degrees downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 4],
    pub hpr: Vec3,
}

impl DirectionalLight {
    pub fn new(color: [f32; 4]) -> Self {
        Self {
            color,
            hpr: Vec3::ZERO,
        }
    }

    pub fn set_hpr(&mut self, heading: f32, pitch: f32, roll: f32) {
        self.hpr = Vec3::new(heading, pitch, roll);
    }

    /// Unit vector the light travels along.
    pub fn direction(&self) -> Vec3 {
        let rotation = Quat::from_euler(
            EulerRot::ZXY,
            self.hpr.x.to_radians(),
            self.hpr.y.to_radians(),
            self.hpr.z.to_radians(),
        );
        (rotation * Vec3::Y).normalize()
    }
}

/// Flat ambient term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 4],
}

impl AmbientLight {
    pub fn new(color: [f32; 4]) -> Self {
        Self { color }
    }
}

/// Light uniform buffer data for GPU (vec3 padded to vec4 for WGSL).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub direction: [f32; 3],
    pub _pad: f32,
    pub directional_color: [f32; 4],
    pub ambient_color: [f32; 4],
}

impl LightUniform {
    pub fn new(directional: &DirectionalLight, ambient: &AmbientLight) -> Self {
        Self {
            direction: directional.direction().to_array(),
            _pad: 0.0,
            directional_color: directional.color,
            ambient_color: ambient.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_default_direction_is_forward() {
        let light = DirectionalLight::new([1.0, 1.0, 1.0, 1.0]);
        assert!((light.direction() - Vec3::Y).length() < EPS);
    }

    #[test]
    fn test_negative_pitch_tilts_downward() {
        let mut light = DirectionalLight::new([0.8, 0.8, 0.8, 1.0]);
        light.set_hpr(0.0, -60.0, 0.0);

        let dir = light.direction();
        assert!((dir.length() - 1.0).abs() < EPS);
        assert!(dir.z < 0.0, "light should point downward, got {dir:?}");
        assert!(dir.y > 0.0);
        assert!((dir.z + 60f32.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn test_heading_swings_direction_sideways() {
        let mut light = DirectionalLight::new([1.0, 1.0, 1.0, 1.0]);
        light.set_hpr(90.0, 0.0, 0.0);

        let dir = light.direction();
        assert!((dir - Vec3::new(-1.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_uniform_packs_both_lights() {
        let mut directional = DirectionalLight::new([0.8, 0.8, 0.8, 1.0]);
        directional.set_hpr(0.0, -60.0, 0.0);
        let ambient = AmbientLight::new([0.2, 0.2, 0.2, 1.0]);

        let uniform = LightUniform::new(&directional, &ambient);
        assert_eq!(uniform.directional_color, [0.8, 0.8, 0.8, 1.0]);
        assert_eq!(uniform.ambient_color, [0.2, 0.2, 0.2, 1.0]);
        assert_eq!(uniform.direction, directional.direction().to_array());
    }

    #[test]
    fn test_uniform_size_is_wgsl_aligned() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 48);
    }
}

use glam::Vec3;
use thiserror::Error;

/// Errors produced while building mesh geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A builder parameter was outside its valid range. No partial mesh is
    /// ever returned alongside this error.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// A single mesh vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    /// Vertex buffer layout matching the `planet.wgsl` vertex inputs.
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// An indexed triangle mesh. Created once by a builder, immutable afterwards,
/// and owned exclusively by the caller.
///
/// Indices come in triples; winding is counter-clockwise when viewed from
/// outside the surface, so back-face culling behaves correctly.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when every index references a vertex of this mesh and the index
    /// list forms whole triangles.
    pub fn indices_in_range(&self) -> bool {
        let n = self.vertices.len() as u32;
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| i < n)
    }
}

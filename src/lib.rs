pub mod camera;
pub mod cli;
pub mod config;
pub mod lighting;
pub mod mesh;
pub mod renderer;
pub mod rotation;
pub mod sphere;
pub mod texture;
pub mod transform;

pub use mesh::{Mesh, MeshError, Vertex};
pub use rotation::{FrameControl, Spinner};
pub use sphere::create_uv_sphere;
pub use transform::Transform;

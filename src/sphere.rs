//! Procedural UV-sphere generation.
//!
//! The sphere is sampled on a uniform latitude/longitude grid. The seam
//! column and the pole rows carry duplicated positions with distinct texture
//! u values; that duplication is what lets an equirectangular texture wrap
//! without a visible seam, so it is kept rather than welded away.

use std::f32::consts::PI;

use crate::mesh::{Mesh, MeshError, Vertex};

/// Minimum longitude divisions needed to close the surface.
pub const MIN_SLICES: u32 = 3;
/// Minimum latitude divisions: both poles plus at least one band.
pub const MIN_STACKS: u32 = 2;

/// Builds a UV-sphere of the given radius centered at the origin.
///
/// `slices` divides longitude, `stacks` divides latitude. The result has
/// `(stacks + 1) * (slices + 1)` vertices and `2 * stacks * slices`
/// triangles, wound counter-clockwise viewed from outside. Normals are the
/// unit radial direction and texture coordinates cover `[0, 1]` in both
/// axes, with `v = 0` at the south pole.
///
/// The computation is pure: identical inputs produce bit-identical meshes.
pub fn create_uv_sphere(radius: f32, slices: u32, stacks: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(MeshError::InvalidParameter(format!(
            "radius must be a positive finite number, got {radius}"
        )));
    }
    if slices < MIN_SLICES {
        return Err(MeshError::InvalidParameter(format!(
            "slices must be >= {MIN_SLICES}, got {slices}"
        )));
    }
    if stacks < MIN_STACKS {
        return Err(MeshError::InvalidParameter(format!(
            "stacks must be >= {MIN_STACKS}, got {stacks}"
        )));
    }

    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);

    for i in 0..=stacks {
        // Latitude runs from -pi/2 (south pole) to +pi/2 (north pole).
        let lat = PI * (i as f32 / stacks as f32 - 0.5);
        let (sin_lat, cos_lat) = lat.sin_cos();

        for j in 0..=slices {
            // The j == slices column repeats the j == 0 angle so u can run
            // all the way to 1.0 across the seam.
            let lon = 2.0 * PI * j as f32 / slices as f32;
            let (sin_lon, cos_lon) = lon.sin_cos();

            let unit = [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat];
            let position = [radius * unit[0], radius * unit[1], radius * unit[2]];
            let uv = [j as f32 / slices as f32, i as f32 / stacks as f32];

            vertices.push(Vertex::new(position, unit, uv));
        }
    }

    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);

    for i in 0..stacks {
        for j in 0..slices {
            let p1 = i * (slices + 1) + j;
            let p2 = p1 + slices + 1;
            let p3 = p1 + 1;
            let p4 = p2 + 1;

            indices.extend_from_slice(&[p1, p3, p2]);
            indices.extend_from_slice(&[p3, p4, p2]);
        }
    }

    Ok(Mesh { vertices, indices })
}

use planet_demo::mesh::MeshError;
use planet_demo::sphere::create_uv_sphere;

#[cfg(test)]
mod sphere_tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_counts_match_tessellation() {
        for (slices, stacks) in [(3, 2), (4, 2), (8, 4), (32, 32), (64, 17)] {
            let mesh = create_uv_sphere(1.0, slices, stacks).unwrap();
            assert_eq!(
                mesh.vertex_count() as u32,
                (stacks + 1) * (slices + 1),
                "vertex count for {}x{}",
                slices,
                stacks
            );
            assert_eq!(
                mesh.triangle_count() as u32,
                2 * stacks * slices,
                "triangle count for {}x{}",
                slices,
                stacks
            );
        }
    }

    #[test]
    fn test_every_vertex_at_requested_radius() {
        for radius in [0.25, 1.0, 10.0] {
            let mesh = create_uv_sphere(radius, 16, 8).unwrap();
            for v in &mesh.vertices {
                let distance = v.position().length();
                assert!(
                    (distance - radius).abs() < radius * 1e-5,
                    "distance {} for radius {}",
                    distance,
                    radius
                );
            }
        }
    }

    #[test]
    fn test_normals_are_unit_radial_directions() {
        let mesh = create_uv_sphere(5.0, 12, 7).unwrap();
        for v in &mesh.vertices {
            assert!((v.normal().length() - 1.0).abs() < EPS);
            assert!(v.position().normalize().dot(v.normal()) > 1.0 - EPS);
        }
    }

    #[test]
    fn test_uv_covers_unit_square() {
        let mesh = create_uv_sphere(1.0, 10, 5).unwrap();
        for v in &mesh.vertices {
            assert!((0.0..=1.0).contains(&v.uv[0]), "u out of range: {}", v.uv[0]);
            assert!((0.0..=1.0).contains(&v.uv[1]), "v out of range: {}", v.uv[1]);
        }

        // One pole at v = 0, the other at v = 1
        let south = mesh.vertices.first().unwrap();
        let north = mesh.vertices.last().unwrap();
        assert_eq!(south.uv[1], 0.0);
        assert_eq!(north.uv[1], 1.0);
        assert!(south.position[2] < 0.0 && north.position[2] > 0.0);
    }

    #[test]
    fn test_all_indices_reference_existing_vertices() {
        let mesh = create_uv_sphere(2.0, 9, 5).unwrap();
        assert!(mesh.indices_in_range());
    }

    #[test]
    fn test_documented_example_four_slices_two_stacks() {
        let mesh = create_uv_sphere(1.0, 4, 2).unwrap();

        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.triangle_count(), 16);

        // Grid point (i = 1, j = 0): the equator at longitude zero
        let v = &mesh.vertices[5];
        assert!((v.position().x - 1.0).abs() < EPS);
        assert!(v.position().y.abs() < EPS);
        assert!(v.position().z.abs() < EPS);
        assert!((v.normal().x - 1.0).abs() < EPS);
        assert!((v.uv[0] - 0.0).abs() < EPS);
        assert!((v.uv[1] - 0.5).abs() < EPS);
    }

    #[test]
    fn test_zero_radius_is_invalid() {
        let err = create_uv_sphere(0.0, 4, 2).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter(_)));
    }

    #[test]
    fn test_two_slices_is_invalid() {
        let err = create_uv_sphere(1.0, 2, 2).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter(_)));
    }

    #[test]
    fn test_one_stack_is_invalid() {
        let err = create_uv_sphere(1.0, 4, 1).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter(_)));
    }

    #[test]
    fn test_minimum_valid_tessellation() {
        let mesh = create_uv_sphere(1.0, 3, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 4 * 3);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.indices_in_range());
    }

    #[test]
    fn test_repeated_builds_are_bit_identical() {
        let a = create_uv_sphere(2.5, 24, 13).unwrap();
        let b = create_uv_sphere(2.5, 24, 13).unwrap();

        assert_eq!(a.indices, b.indices);
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.position, vb.position);
            assert_eq!(va.normal, vb.normal);
            assert_eq!(va.uv, vb.uv);
        }
    }

    #[test]
    fn test_pole_rows_coincide_in_position() {
        let slices = 6u32;
        let mesh = create_uv_sphere(1.0, slices, 3).unwrap();

        let south = &mesh.vertices[0..=slices as usize];
        let first = south[0].position();
        for v in south {
            assert!(v.position().distance(first) < EPS);
        }

        // Same point in space, but every u value is distinct
        let mut us: Vec<f32> = south.iter().map(|v| v.uv[0]).collect();
        us.dedup();
        assert_eq!(us.len(), slices as usize + 1);
    }
}

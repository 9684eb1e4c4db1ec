use bevy::prelude::*;

/// Estimate smoothed per-vertex normals for a triangle list.
///
/// Accumulates the unnormalised face normal of every triangle onto its three
/// vertices and normalises the sums at the end, so the result is independent
/// of triangle traversal order and larger faces weigh proportionally more.
/// Face normals follow the right-hand rule over the caller's winding. A vertex
/// referenced by no triangle (or only by degenerate ones) accumulates a zero
/// vector and falls back to straight up instead of producing NaN.
pub fn estimate_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;

        let p0 = Vec3::from(positions[i0]);
        let p1 = Vec3::from(positions[i1]);
        let p2 = Vec3::from(positions[i2]);

        let face_normal = (p1 - p0).cross(p2 - p0);
        accumulated[i0] += face_normal;
        accumulated[i1] += face_normal;
        accumulated[i2] += face_normal;
    }

    accumulated
        .into_iter()
        .map(|sum| sum.normalize_or(Vec3::Y).to_array())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flat_quad_normals_point_up() {
        // Two triangles covering the unit quad in the XZ plane, wound so the
        // face normal follows +Y.
        let positions = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
        ];
        let indices = [0, 2, 1, 1, 2, 3];

        for normal in estimate_normals(&positions, &indices) {
            assert_relative_eq!(normal[0], 0.0, epsilon = 1e-6);
            assert_relative_eq!(normal[1], 1.0, epsilon = 1e-6);
            assert_relative_eq!(normal[2], 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn normals_have_unit_length() {
        // An uneven tent shape with shared vertices.
        let positions = [
            [0.0, 0.0, 0.0],
            [2.0, 1.5, 0.0],
            [4.0, 0.0, 0.0],
            [0.0, 0.0, 2.0],
            [2.0, 1.5, 2.0],
            [4.0, 0.0, 2.0],
        ];
        let indices = [0, 3, 1, 1, 3, 4, 1, 4, 2, 2, 4, 5];

        for normal in estimate_normals(&positions, &indices) {
            let length = Vec3::from(normal).length();
            assert_relative_eq!(length, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn unreferenced_vertices_fall_back_to_up() {
        let positions = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [9.0, 9.0, 9.0], // not referenced by any triangle
        ];
        let indices = [0, 2, 1];

        let normals = estimate_normals(&positions, &indices);
        assert_eq!(normals[3], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn traversal_order_does_not_change_the_result() {
        let positions = [
            [0.0, 0.0, 0.0],
            [1.0, 0.3, 0.0],
            [0.0, 0.1, 1.0],
            [1.0, 0.0, 1.0],
        ];
        let forward = [0, 2, 1, 1, 2, 3];
        let reversed = [1, 2, 3, 0, 2, 1];

        assert_eq!(
            estimate_normals(&positions, &forward),
            estimate_normals(&positions, &reversed)
        );
    }
}

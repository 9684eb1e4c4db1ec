use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Raw triangle-list geometry produced by the mesh builders.
///
/// Positions are mandatory; normals and uvs are either empty or one entry per
/// position; indices reference positions in triples. Buffers are built once
/// per scene refresh and never mutated afterwards — the renderer owns them
/// after conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Convert into a renderable Bevy mesh.
    ///
    /// Builders that skip normal estimation (thin overlay slabs, ribbons)
    /// leave `normals` empty; the renderer requires the attribute, so those
    /// meshes get a constant up vector for flat shading.
    pub fn into_mesh(self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD,
        );

        let normals = if self.normals.is_empty() {
            vec![[0.0, 1.0, 0.0]; self.positions.len()]
        } else {
            self.normals
        };

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        if !self.uvs.is_empty() {
            mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs);
        }
        mesh.insert_indices(Indices::U32(self.indices));

        mesh
    }
}

/// Material parameters for one feature layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub colour: Color,
    pub roughness: f32,
    pub metallic: f32,
}

impl SurfaceStyle {
    /// Build the PBR material for this style. Translucent colours render with
    /// alpha blending so layers beneath them stay visible.
    pub fn material(&self) -> StandardMaterial {
        let alpha_mode = if self.colour.alpha() < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        };

        StandardMaterial {
            base_color: self.colour,
            perceptual_roughness: self.roughness,
            metallic: self.metallic,
            alpha_mode,
            ..default()
        }
    }
}

/// One geometry-plus-style unit handed to the renderer.
#[derive(Debug, Clone)]
pub struct StyledMesh {
    pub buffer: MeshBuffer,
    pub style: SurfaceStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_normals_default_to_up_vectors() {
        let buffer = MeshBuffer {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: vec![0, 2, 1],
        };

        let mesh = buffer.into_mesh();
        let normals = mesh
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .and_then(|values| values.as_float3())
            .unwrap();
        assert_eq!(normals, &[[0.0, 1.0, 0.0]; 3]);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_UV_0).is_none());
    }

    #[test]
    fn translucent_styles_blend_and_opaque_styles_do_not() {
        let translucent = SurfaceStyle {
            colour: Color::srgba(0.1, 0.2, 0.3, 0.5),
            roughness: 0.5,
            metallic: 0.0,
        };
        let opaque = SurfaceStyle {
            colour: Color::srgb(0.1, 0.2, 0.3),
            roughness: 0.5,
            metallic: 0.0,
        };

        assert_eq!(translucent.material().alpha_mode, AlphaMode::Blend);
        assert_eq!(opaque.material().alpha_mode, AlphaMode::Opaque);
    }
}

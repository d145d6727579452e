//! Interpolated vertex stream generation
//!
//! The stream is a plain triangle list: three [`Vertex`] records per
//! triangle, in triangle order, with no vertex sharing.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::model::Md2Model;
use crate::normals::NORMALS;
use crate::playback::PlaybackState;

/// Renderer-facing vertex record
///
/// Laid out as eight consecutive `f32`s so a slice of vertices can be
/// uploaded directly with [`bytemuck::cast_slice`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub position: [f32; 3],
    /// Blended table normal, not renormalized
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

/// Fill `out` with the model's vertices at the state's cursor
///
/// Positions and normals are blended linearly between the cursor's frame
/// and the next frame of the active sequence. Blended normals are shorter
/// than unit length between keyframes; shaders are expected to normalize.
///
/// # Panics
///
/// Panics if `out` holds fewer than [`Md2Model::vertex_stream_len`]
/// records, or if a triangle references a vertex, texcoord or normal that
/// does not exist (see [`validate_model`](crate::validation::validate_model)).
pub fn generate_vertices(model: &Md2Model, state: &PlaybackState, out: &mut [Vertex]) {
    assert!(
        out.len() >= model.vertex_stream_len(),
        "vertex buffer holds {} records, {} required",
        out.len(),
        model.vertex_stream_len()
    );
    if model.triangles().is_empty() {
        return;
    }

    let interp = state.interpolation();
    let frame_a = &model.frames()[interp.frame_a];
    let frame_b = &model.frames()[interp.frame_b];
    let lerp = interp.lerp;
    let one_minus_lerp = 1.0 - lerp;

    let skin_width = model.skin_width();
    let skin_height = model.skin_height();
    let tex_coords = model.tex_coords();

    for (triangle, corners) in model.triangles().iter().zip(out.chunks_exact_mut(3)) {
        for (j, vertex) in corners.iter_mut().enumerate() {
            let index = usize::from(triangle.vertex_indices[j]);
            let vert_a = frame_a.vertices[index];
            let vert_b = frame_b.vertices[index];

            let pos_a = frame_a.decompress(vert_a);
            let pos_b = frame_b.decompress(vert_b);
            let norm_a = Vec3::from_array(NORMALS[usize::from(vert_a.normal_index)]);
            let norm_b = Vec3::from_array(NORMALS[usize::from(vert_b.normal_index)]);

            let tex_coord = tex_coords[usize::from(triangle.tex_coord_indices[j])];

            *vertex = Vertex {
                position: (pos_a * one_minus_lerp + pos_b * lerp).to_array(),
                normal: (norm_a * one_minus_lerp + norm_b * lerp).to_array(),
                tex_coord: tex_coord.to_uv(skin_width, skin_height),
            };
        }
    }
}

/// Generate a freshly allocated vertex stream
pub fn generate_vertex_vec(model: &Md2Model, state: &PlaybackState) -> Vec<Vertex> {
    let mut vertices = vec![Vertex::default(); model.vertex_stream_len()];
    generate_vertices(model, state, &mut vertices);
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);

        let vertices = [Vertex {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 0.0, 1.0],
            tex_coord: [0.5, 0.25],
        }];
        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_empty_model_generates_nothing() {
        let model = Md2Model::default();
        let state = PlaybackState::new();
        assert!(generate_vertex_vec(&model, &state).is_empty());
    }
}

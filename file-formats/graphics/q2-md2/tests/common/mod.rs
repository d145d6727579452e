//! Builders for synthetic MD2 files

#![allow(dead_code)]

use q2_md2::REQUIRED_FRAME_COUNT;
use q2_md2::header::{HEADER_SIZE, MD2_IDENT, MD2_VERSION};

/// Header field positions, in 4-byte words
pub mod field {
    pub const IDENT: usize = 0;
    pub const VERSION: usize = 1;
    pub const SKIN_WIDTH: usize = 2;
    pub const SKIN_HEIGHT: usize = 3;
    pub const SKIN_COUNT: usize = 5;
    pub const VERTEX_COUNT: usize = 6;
    pub const TEX_COORD_COUNT: usize = 7;
    pub const TRIANGLE_COUNT: usize = 8;
    pub const FRAME_COUNT: usize = 10;
    pub const FRAME_OFFSET: usize = 14;
}

/// Overwrite one header field of an encoded file
pub fn set_header_field(data: &mut [u8], field: usize, value: i32) {
    data[field * 4..field * 4 + 4].copy_from_slice(&value.to_le_bytes());
}

#[derive(Debug, Clone)]
pub struct FrameData {
    pub scale: [f32; 3],
    pub translation: [f32; 3],
    pub name: String,
    /// x, y, z, normal index
    pub vertices: Vec<[u8; 4]>,
}

#[derive(Debug, Clone)]
pub struct ModelBuilder {
    pub skin_width: i32,
    pub skin_height: i32,
    pub skins: Vec<String>,
    pub tex_coords: Vec<(i16, i16)>,
    pub triangles: Vec<([u16; 3], [u16; 3])>,
    pub frames: Vec<FrameData>,
}

/// Vertices of frame `f` in the one-triangle model
pub fn triangle_frame_vertices(f: usize) -> Vec<[u8; 4]> {
    let f8 = f as u8;
    vec![
        [f8, 1, 2, (f % 162) as u8],
        [3, f8, 5, ((f + 1) % 162) as u8],
        [6, 7, f8, ((f + 2) % 162) as u8],
    ]
}

impl ModelBuilder {
    /// One triangle over three vertices and three texcoords, no skins, a
    /// full set of frames with identity transforms
    pub fn single_triangle() -> Self {
        let frames = (0..REQUIRED_FRAME_COUNT)
            .map(|f| FrameData {
                scale: [1.0, 1.0, 1.0],
                translation: [0.0, 0.0, 0.0],
                name: format!("frame{f:03}"),
                vertices: triangle_frame_vertices(f),
            })
            .collect();

        Self {
            skin_width: 64,
            skin_height: 32,
            skins: Vec::new(),
            tex_coords: vec![(0, 0), (32, 0), (16, 32)],
            triangles: vec![([0, 1, 2], [0, 1, 2])],
            frames,
        }
    }

    pub fn with_skins(mut self, skins: &[&str]) -> Self {
        self.skins = skins.iter().map(|s| (*s).to_string()).collect();
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.frames.first().map_or(0, |f| f.vertices.len())
    }

    /// Encode as an MD2 file
    pub fn build(&self) -> Vec<u8> {
        let vertex_count = self.vertex_count();
        let frame_size = 40 + 4 * vertex_count;

        let skin_offset = HEADER_SIZE;
        let tex_coord_offset = skin_offset + 64 * self.skins.len();
        let triangle_offset = tex_coord_offset + 4 * self.tex_coords.len();
        let frame_offset = triangle_offset + 12 * self.triangles.len();
        let end_offset = frame_offset + frame_size * self.frames.len();

        let header = [
            MD2_IDENT,
            MD2_VERSION,
            self.skin_width,
            self.skin_height,
            frame_size as i32,
            self.skins.len() as i32,
            vertex_count as i32,
            self.tex_coords.len() as i32,
            self.triangles.len() as i32,
            0,
            self.frames.len() as i32,
            skin_offset as i32,
            tex_coord_offset as i32,
            triangle_offset as i32,
            frame_offset as i32,
            end_offset as i32,
            end_offset as i32,
        ];

        let mut data = Vec::with_capacity(end_offset);
        for value in header {
            data.extend_from_slice(&value.to_le_bytes());
        }
        for skin in &self.skins {
            let mut name = [0u8; 64];
            name[..skin.len()].copy_from_slice(skin.as_bytes());
            data.extend_from_slice(&name);
        }
        for (s, t) in &self.tex_coords {
            data.extend_from_slice(&s.to_le_bytes());
            data.extend_from_slice(&t.to_le_bytes());
        }
        for (vertex_indices, tex_coord_indices) in &self.triangles {
            for index in vertex_indices.iter().chain(tex_coord_indices) {
                data.extend_from_slice(&index.to_le_bytes());
            }
        }
        for frame in &self.frames {
            for v in frame.scale.iter().chain(&frame.translation) {
                data.extend_from_slice(&v.to_le_bytes());
            }
            let mut name = [0u8; 16];
            name[..frame.name.len()].copy_from_slice(frame.name.as_bytes());
            data.extend_from_slice(&name);
            for vertex in &frame.vertices {
                data.extend_from_slice(vertex);
            }
        }

        assert_eq!(data.len(), end_offset);
        data
    }
}

//! Section records of an MD2 file

use byteorder::{LittleEndian, ReadBytesExt};
use glam::Vec3;
use memchr::memchr;
use std::io::{self, Read};

/// Length of a skin name record
pub const SKIN_NAME_LEN: usize = 64;

/// Length of a frame name record
pub const FRAME_NAME_LEN: usize = 16;

/// Most records reserved before any are read; header counts are untrusted
pub(crate) const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Decode a fixed-length, NUL-padded name
fn read_name<R: Read, const N: usize>(reader: &mut R) -> io::Result<String> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    let end = memchr(0, &buf).unwrap_or(N);
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}

/// Name of an external skin texture
///
/// The pixel data is not part of the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Skin {
    /// Texture path, usually relative to the game data directory
    pub name: String,
}

impl Skin {
    /// Read a 64-byte skin record
    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            name: read_name::<_, SKIN_NAME_LEN>(reader)?,
        })
    }
}

/// Texel coordinate into the skin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct TexCoord {
    pub s: i16,
    pub t: i16,
}

impl TexCoord {
    /// Read a 2×i16 texcoord record
    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            s: reader.read_i16::<LittleEndian>()?,
            t: reader.read_i16::<LittleEndian>()?,
        })
    }

    /// Normalized UV with the V axis flipped
    ///
    /// Divides by the skin size without checking for zero.
    pub fn to_uv(self, skin_width: i32, skin_height: i32) -> [f32; 2] {
        [
            f32::from(self.s) / skin_width as f32,
            1.0 - f32::from(self.t) / skin_height as f32,
        ]
    }
}

/// Triangle referencing three vertices and three texcoords
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// Indices into each frame's vertex array
    pub vertex_indices: [u16; 3],
    /// Indices into the texcoord array
    pub tex_coord_indices: [u16; 3],
}

impl Triangle {
    /// Read a 3×u16 + 3×u16 triangle record
    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut vertex_indices = [0u16; 3];
        reader.read_u16_into::<LittleEndian>(&mut vertex_indices)?;
        let mut tex_coord_indices = [0u16; 3];
        reader.read_u16_into::<LittleEndian>(&mut tex_coord_indices)?;
        Ok(Self {
            vertex_indices,
            tex_coord_indices,
        })
    }
}

/// Quantized vertex of one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressedVertex {
    /// Position in frame-local 0..=255 units
    pub position: [u8; 3],
    /// Index into [`NORMALS`](crate::normals::NORMALS)
    pub normal_index: u8,
}

impl CompressedVertex {
    /// Read a 4-byte vertex record
    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut buf = [0u8; 4];
        reader.read_exact(&mut buf)?;
        Ok(Self {
            position: [buf[0], buf[1], buf[2]],
            normal_index: buf[3],
        })
    }
}

/// One keyframe
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Per-axis scale applied to quantized positions
    pub scale: Vec3,
    /// Per-axis translation applied after scaling
    pub translation: Vec3,
    /// Frame name, e.g. "stand01"
    pub name: String,
    /// Quantized vertices, one per model vertex
    pub vertices: Vec<CompressedVertex>,
}

impl Frame {
    /// Read a frame record holding `vertex_count` vertices
    pub fn read<R: Read>(reader: &mut R, vertex_count: usize) -> io::Result<Self> {
        let mut scale = [0f32; 3];
        reader.read_f32_into::<LittleEndian>(&mut scale)?;
        let mut translation = [0f32; 3];
        reader.read_f32_into::<LittleEndian>(&mut translation)?;
        let name = read_name::<_, FRAME_NAME_LEN>(reader)?;

        let mut vertices = Vec::with_capacity(vertex_count.min(MAX_PREALLOCATED_RECORDS));
        for _ in 0..vertex_count {
            vertices.push(CompressedVertex::read(reader)?);
        }

        Ok(Self {
            scale: Vec3::from_array(scale),
            translation: Vec3::from_array(translation),
            name,
            vertices,
        })
    }

    /// World-space position of a quantized vertex in this frame
    pub fn decompress(&self, vertex: CompressedVertex) -> Vec3 {
        let [x, y, z] = vertex.position;
        self.scale * Vec3::new(f32::from(x), f32::from(y), f32::from(z)) + self.translation
    }

    /// World-space position of the vertex at `index`
    pub fn vertex_position(&self, index: usize) -> Option<[f32; 3]> {
        self.vertices
            .get(index)
            .map(|v| self.decompress(*v).to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_skin_name_stops_at_nul() {
        let mut data = vec![0u8; SKIN_NAME_LEN];
        data[..22].copy_from_slice(b"players/male/grunt.pcx");
        data[30] = b'x';
        let skin = Skin::read(&mut Cursor::new(data)).unwrap();
        assert_eq!(skin.name, "players/male/grunt.pcx");
    }

    #[test]
    fn test_skin_name_without_nul() {
        let data = vec![b'a'; SKIN_NAME_LEN];
        let skin = Skin::read(&mut Cursor::new(data)).unwrap();
        assert_eq!(skin.name.len(), SKIN_NAME_LEN);
    }

    #[test]
    fn test_triangle_read() {
        let data: Vec<u8> = [0u16, 1, 2, 5, 6, 7]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let triangle = Triangle::read(&mut Cursor::new(data)).unwrap();
        assert_eq!(triangle.vertex_indices, [0, 1, 2]);
        assert_eq!(triangle.tex_coord_indices, [5, 6, 7]);
    }

    #[test]
    fn test_tex_coord_uv() {
        let tc = TexCoord { s: 64, t: 32 };
        assert_eq!(tc.to_uv(256, 128), [0.25, 0.75]);
    }

    #[test]
    fn test_frame_read_and_decompress() {
        let mut data = Vec::new();
        for v in [2.0f32, 0.5, 1.0, 10.0, -4.0, 0.0] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        let mut name = [0u8; FRAME_NAME_LEN];
        name[..6].copy_from_slice(b"run1\0\0");
        data.extend_from_slice(&name);
        data.extend_from_slice(&[1, 2, 3, 7, 255, 0, 128, 161]);

        let frame = Frame::read(&mut Cursor::new(data), 2).unwrap();
        assert_eq!(frame.name, "run1");
        assert_eq!(frame.vertices.len(), 2);
        assert_eq!(frame.vertices[0].normal_index, 7);
        assert_eq!(frame.vertex_position(0), Some([12.0, -3.0, 3.0]));
        assert_eq!(frame.vertex_position(1), Some([520.0, -4.0, 128.0]));
        assert_eq!(frame.vertex_position(2), None);
    }

    #[test]
    fn test_frame_truncated() {
        let data = vec![0u8; 24 + FRAME_NAME_LEN + 3];
        let err = Frame::read(&mut Cursor::new(data), 1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_frame_huge_vertex_count_fails_cleanly() {
        let data = vec![0u8; 24 + FRAME_NAME_LEN + 8];
        let err = Frame::read(&mut Cursor::new(data), usize::MAX).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}

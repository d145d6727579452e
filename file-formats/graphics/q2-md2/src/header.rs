//! MD2 file header

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Magic signature for MD2 files ("IDP2")
pub const MD2_MAGIC: [u8; 4] = *b"IDP2";

/// [`MD2_MAGIC`] packed little-endian, as stored in the header
pub const MD2_IDENT: i32 = i32::from_le_bytes(MD2_MAGIC);

/// The only supported format version
pub const MD2_VERSION: i32 = 8;

/// Size of the header in bytes
pub const HEADER_SIZE: usize = 17 * 4;

/// MD2 file header
///
/// All fields are little-endian `i32` on disk. Offsets are measured from the
/// start of the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Md2Header {
    /// Magic identifier, must equal [`MD2_IDENT`]
    pub ident: i32,
    /// Format version, must equal [`MD2_VERSION`]
    pub version: i32,

    /// Width of the skin texture
    pub skin_width: i32,
    /// Height of the skin texture
    pub skin_height: i32,
    /// Size of one frame record in bytes
    pub frame_size: i32,

    /// Number of skins
    pub skin_count: i32,
    /// Number of vertices per frame
    pub vertex_count: i32,
    /// Number of texture coordinates
    pub tex_coord_count: i32,
    /// Number of triangles
    pub triangle_count: i32,
    /// Number of GL command words
    pub glcmd_count: i32,
    /// Number of frames
    pub frame_count: i32,

    /// Offset to skin names
    pub skin_offset: i32,
    /// Offset to texture coordinates
    pub tex_coord_offset: i32,
    /// Offset to triangles
    pub triangle_offset: i32,
    /// Offset to frames
    pub frame_offset: i32,
    /// Offset to GL commands
    pub glcmd_offset: i32,
    /// Offset to the end of the file
    pub end_offset: i32,
}

impl Md2Header {
    /// Read a header from a reader
    ///
    /// No field is validated here; see [`Md2Header::has_valid_ident`] and
    /// [`Md2Header::has_valid_version`].
    pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        Ok(Self {
            ident: reader.read_i32::<LittleEndian>()?,
            version: reader.read_i32::<LittleEndian>()?,
            skin_width: reader.read_i32::<LittleEndian>()?,
            skin_height: reader.read_i32::<LittleEndian>()?,
            frame_size: reader.read_i32::<LittleEndian>()?,
            skin_count: reader.read_i32::<LittleEndian>()?,
            vertex_count: reader.read_i32::<LittleEndian>()?,
            tex_coord_count: reader.read_i32::<LittleEndian>()?,
            triangle_count: reader.read_i32::<LittleEndian>()?,
            glcmd_count: reader.read_i32::<LittleEndian>()?,
            frame_count: reader.read_i32::<LittleEndian>()?,
            skin_offset: reader.read_i32::<LittleEndian>()?,
            tex_coord_offset: reader.read_i32::<LittleEndian>()?,
            triangle_offset: reader.read_i32::<LittleEndian>()?,
            frame_offset: reader.read_i32::<LittleEndian>()?,
            glcmd_offset: reader.read_i32::<LittleEndian>()?,
            end_offset: reader.read_i32::<LittleEndian>()?,
        })
    }

    /// Check the magic identifier
    pub fn has_valid_ident(&self) -> bool {
        self.ident == MD2_IDENT
    }

    /// Check the format version
    pub fn has_valid_version(&self) -> bool {
        self.version == MD2_VERSION
    }

    /// The magic identifier as raw bytes
    pub fn magic(&self) -> [u8; 4] {
        self.ident.to_le_bytes()
    }
}

//! MD2 model loading
//!
//! [`Md2Model`] owns every section of a parsed file. Loading either
//! produces a complete model or an [`Md2Error`]; no partially filled model
//! is ever handed out.

use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::animation::REQUIRED_FRAME_COUNT;
use crate::error::{Md2Error, Result};
use crate::header::Md2Header;
use crate::types::{Frame, MAX_PREALLOCATED_RECORDS, Skin, TexCoord, Triangle};

/// A loaded MD2 model
///
/// With `serde-support`, deserialized models must pass the count checks of
/// loading and every index check of [`validate_model`](crate::validate_model)
/// except the skin size, so the vertex generator can follow them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(try_from = "Md2ModelData"))]
pub struct Md2Model {
    header: Md2Header,
    vertex_count: usize,
    skins: Vec<Skin>,
    tex_coords: Vec<TexCoord>,
    triangles: Vec<Triangle>,
    frames: Vec<Frame>,
}

/// Unchecked field layout of a serialized [`Md2Model`]
#[cfg(feature = "serde-support")]
#[derive(serde::Deserialize)]
struct Md2ModelData {
    header: Md2Header,
    vertex_count: usize,
    skins: Vec<Skin>,
    tex_coords: Vec<TexCoord>,
    triangles: Vec<Triangle>,
    frames: Vec<Frame>,
}

#[cfg(feature = "serde-support")]
impl TryFrom<Md2ModelData> for Md2Model {
    type Error = crate::error::DataError;

    fn try_from(data: Md2ModelData) -> std::result::Result<Self, Self::Error> {
        use crate::error::DataError;
        use crate::validation::{ValidationIssue, validate_model};

        if data.triangles.is_empty()
            || data.vertex_count == 0
            || data.frames.len() != REQUIRED_FRAME_COUNT
        {
            return Err(DataError::BadCounts {
                triangles: data.triangles.len(),
                vertices: data.vertex_count,
                frames: data.frames.len(),
            });
        }

        if let Some((frame, found)) = data
            .frames
            .iter()
            .map(|f| f.vertices.len())
            .enumerate()
            .find(|&(_, len)| len != data.vertex_count)
        {
            return Err(DataError::FrameVertexCount {
                frame,
                found,
                expected: data.vertex_count,
            });
        }

        let model = Self {
            header: data.header,
            vertex_count: data.vertex_count,
            skins: data.skins,
            tex_coords: data.tex_coords,
            triangles: data.triangles,
            frames: data.frames,
        };

        // Skin size only affects texture coordinates, never indexing
        let issue = validate_model(&model)
            .issues
            .into_iter()
            .find(|issue| !matches!(issue, ValidationIssue::InvalidSkinSize { .. }));
        match issue {
            Some(issue) => Err(issue.into()),
            None => Ok(model),
        }
    }
}

/// Section reader bound to the source name used in errors
struct SectionReader<'a, R> {
    reader: R,
    name: &'a str,
}

impl<R: Read + Seek> SectionReader<'_, R> {
    fn io_error(&self, source: io::Error) -> Md2Error {
        Md2Error::Io {
            name: self.name.to_string(),
            source,
        }
    }

    fn seek_to(&mut self, section: &str, offset: i32) -> Result<()> {
        let position = u64::try_from(offset).map_err(|_| {
            self.io_error(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("negative {section} offset {offset}"),
            ))
        })?;
        debug!("Reading {section} section at offset {position}");
        self.reader
            .seek(SeekFrom::Start(position))
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn read_records<T>(
        &mut self,
        count: usize,
        read: impl Fn(&mut R) -> io::Result<T>,
    ) -> Result<Vec<T>> {
        let mut records = Vec::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));
        for _ in 0..count {
            let record = read(&mut self.reader).map_err(|e| self.io_error(e))?;
            records.push(record);
        }
        Ok(records)
    }
}

impl Md2Model {
    /// Load a model from a file
    ///
    /// Errors name the file by its path.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use q2_md2::Md2Model;
    ///
    /// let model = Md2Model::load("models/players/male/tris.md2").unwrap();
    /// println!("{} triangles", model.triangle_count());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|source| Md2Error::NotFound {
            name: name.clone(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), &name)
    }

    /// Load a model from any seekable byte stream
    ///
    /// `name` identifies the stream in errors. Negative skin and texcoord
    /// counts are not errors; those sections load empty.
    pub fn from_reader<R: Read + Seek>(mut reader: R, name: &str) -> Result<Self> {
        let header = Md2Header::read(&mut reader).map_err(|source| Md2Error::NotFound {
            name: name.to_string(),
            source,
        })?;

        if !header.has_valid_ident() {
            return Err(Md2Error::BadIdent {
                name: name.to_string(),
                found: header.ident,
            });
        }
        if !header.has_valid_version() {
            return Err(Md2Error::BadVersion {
                name: name.to_string(),
                found: header.version,
            });
        }

        debug!(
            "{name}: {}x{} skin, {} skins, {} vertices, {} texcoords, {} triangles, {} frames",
            header.skin_width,
            header.skin_height,
            header.skin_count,
            header.vertex_count,
            header.tex_coord_count,
            header.triangle_count,
            header.frame_count
        );

        let mut sections = SectionReader { reader, name };

        let skins = match usize::try_from(header.skin_count) {
            Ok(count) if count > 0 => {
                sections.seek_to("skin", header.skin_offset)?;
                sections.read_records(count, Skin::read)?
            }
            _ => Vec::new(),
        };

        let tex_coords = match usize::try_from(header.tex_coord_count) {
            Ok(count) if count > 0 => {
                sections.seek_to("texcoord", header.tex_coord_offset)?;
                sections.read_records(count, TexCoord::read)?
            }
            _ => Vec::new(),
        };

        let triangles = match usize::try_from(header.triangle_count) {
            Ok(count) if count > 0 => {
                sections.seek_to("triangle", header.triangle_offset)?;
                sections.read_records(count, Triangle::read)?
            }
            _ => {
                return Err(Md2Error::BadTriangleData {
                    name: name.to_string(),
                    count: header.triangle_count,
                });
            }
        };

        if usize::try_from(header.frame_count).ok() != Some(REQUIRED_FRAME_COUNT) {
            return Err(Md2Error::BadFrameData {
                name: name.to_string(),
                count: header.frame_count,
                expected: REQUIRED_FRAME_COUNT,
            });
        }

        let vertex_count = match usize::try_from(header.vertex_count) {
            Ok(count) if count > 0 => count,
            _ => {
                return Err(Md2Error::BadVertexData {
                    name: name.to_string(),
                    count: header.vertex_count,
                });
            }
        };

        sections.seek_to("frame", header.frame_offset)?;
        let frames = sections.read_records(REQUIRED_FRAME_COUNT, |r| {
            let frame = Frame::read(r, vertex_count)?;
            trace!("Frame '{}' scale {} translation {}", frame.name, frame.scale, frame.translation);
            Ok(frame)
        })?;

        Ok(Self {
            header,
            vertex_count,
            skins,
            tex_coords,
            triangles,
            frames,
        })
    }

    /// Replace this model with the contents of another file
    ///
    /// Everything currently owned is released before loading starts. When
    /// loading fails the model is left empty.
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.clear();
        *self = Self::load(path)?;
        Ok(())
    }

    /// Release all owned data
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check whether no model data is present
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Header as read from the file
    pub fn header(&self) -> &Md2Header {
        &self.header
    }

    /// Number of vertices in every frame
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of skins
    ///
    /// A negative count in the header loads as no skins, so this can differ
    /// from [`Md2Header::skin_count`].
    pub fn skin_count(&self) -> usize {
        self.skins.len()
    }

    /// Number of texture coordinates
    ///
    /// A negative count in the header loads as no texture coordinates, so
    /// this can differ from [`Md2Header::tex_coord_count`].
    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Width of the skin texture
    pub fn skin_width(&self) -> i32 {
        self.header.skin_width
    }

    /// Height of the skin texture
    pub fn skin_height(&self) -> i32 {
        self.header.skin_height
    }

    pub fn skins(&self) -> &[Skin] {
        &self.skins
    }

    pub fn tex_coords(&self) -> &[TexCoord] {
        &self.tex_coords
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame at `index`
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Number of [`Vertex`](crate::Vertex) records one generated stream holds
    pub fn vertex_stream_len(&self) -> usize {
        self.triangles.len() * 3
    }
}

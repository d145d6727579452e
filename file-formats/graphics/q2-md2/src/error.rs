//! Error handling for MD2 loading

use std::io;
use thiserror::Error;

/// Errors that can occur when loading an MD2 model
///
/// Every variant carries the name of the source being loaded (the file path,
/// or the identifier handed to [`Md2Model::from_reader`](crate::Md2Model::from_reader)).
#[derive(Debug, Error)]
pub enum Md2Error {
    /// The source could not be opened, or its header could not be read
    #[error("The file {name} was not found or could not be read: {source}")]
    NotFound {
        /// Source name
        name: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Magic identifier is not "IDP2"
    #[error("The file {name} has an invalid MD2 ident: 0x{found:08X}")]
    BadIdent {
        /// Source name
        name: String,
        /// Identifier read from the header
        found: i32,
    },

    /// Format version is not 8
    #[error("The file {name} has an invalid MD2 version: {found}")]
    BadVersion {
        /// Source name
        name: String,
        /// Version read from the header
        found: i32,
    },

    /// Triangle count is not positive
    #[error("The file {name} has invalid MD2 triangle data: {count} triangles")]
    BadTriangleData {
        /// Source name
        name: String,
        /// Triangle count read from the header
        count: i32,
    },

    /// Frame count does not match the animation table
    #[error("The file {name} has invalid MD2 frame data: {count} frames, expected {expected}")]
    BadFrameData {
        /// Source name
        name: String,
        /// Frame count read from the header
        count: i32,
        /// Frame count spanned by the animation table
        expected: usize,
    },

    /// Vertex count is not positive
    #[error("The file {name} has invalid MD2 vertex data: {count} vertices")]
    BadVertexData {
        /// Source name
        name: String,
        /// Vertex count read from the header
        count: i32,
    },

    /// A section could not be read (truncated stream, offset out of range)
    #[error("I/O error while reading {name}: {source}")]
    Io {
        /// Source name
        name: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Md2Error {
    /// Name of the source that failed to load
    pub fn source_name(&self) -> &str {
        match self {
            Self::NotFound { name, .. }
            | Self::BadIdent { name, .. }
            | Self::BadVersion { name, .. }
            | Self::BadTriangleData { name, .. }
            | Self::BadFrameData { name, .. }
            | Self::BadVertexData { name, .. }
            | Self::Io { name, .. } => name,
        }
    }
}

/// Deserialized data that no loaded model or playback state could hold
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// The cursor lies outside the frames of its animation
    #[error("cursor {cursor} is outside animation '{animation}' (frames {start}-{end})")]
    CursorOutOfRange {
        animation: &'static str,
        cursor: f32,
        start: u16,
        end: u16,
    },

    /// Playback speed is negative or not a number
    #[error("playback speed {0} is not a finite, non-negative number")]
    BadSpeed(f32),

    /// Counts that loading would have rejected
    #[error("model has {triangles} triangles, {vertices} vertices and {frames} frames")]
    BadCounts {
        triangles: usize,
        vertices: usize,
        frames: usize,
    },

    /// A frame does not hold one vertex per model vertex
    #[error("frame {frame} holds {found} vertices, expected {expected}")]
    FrameVertexCount {
        frame: usize,
        found: usize,
        expected: usize,
    },

    /// An index the vertex generator would follow is out of range
    #[error(transparent)]
    Index(#[from] crate::validation::ValidationIssue),
}

/// Type alias for Results from MD2 operations
pub type Result<T> = std::result::Result<T, Md2Error>;

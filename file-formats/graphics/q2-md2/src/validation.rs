//! Validation of loaded MD2 models
//!
//! Loading only checks the header counts. These checks go further and look
//! at every index the vertex generator will follow, so callers handling
//! untrusted files can reject them before generating vertices.

use log::warn;
use thiserror::Error;

use crate::model::Md2Model;
use crate::normals::NORMAL_COUNT;

/// A problem found in a loaded model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// A triangle references a vertex past the end of the frame
    #[error("triangle {triangle} references vertex {index} (vertex count {count})")]
    VertexIndexOutOfRange {
        triangle: usize,
        index: u16,
        count: usize,
    },

    /// A triangle references a texcoord past the end of the texcoord array
    #[error("triangle {triangle} references texcoord {index} (texcoord count {count})")]
    TexCoordIndexOutOfRange {
        triangle: usize,
        index: u16,
        count: usize,
    },

    /// A compressed vertex references a normal outside the table
    #[error("frame {frame} vertex {vertex} references normal {index} (table size {})", NORMAL_COUNT)]
    NormalIndexOutOfRange { frame: usize, vertex: usize, index: u8 },

    /// Skin dimensions would divide texcoords by zero or flip them
    #[error("skin size {width}x{height} is not positive")]
    InvalidSkinSize { width: i32, height: i32 },
}

/// Outcome of [`validate_model`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every problem found, in discovery order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check every index reachable from the model's triangles and frames
pub fn validate_model(model: &Md2Model) -> ValidationReport {
    let mut issues = Vec::new();

    if model.skin_width() <= 0 || model.skin_height() <= 0 {
        issues.push(ValidationIssue::InvalidSkinSize {
            width: model.skin_width(),
            height: model.skin_height(),
        });
    }

    for (i, triangle) in model.triangles().iter().enumerate() {
        for &index in &triangle.vertex_indices {
            if usize::from(index) >= model.vertex_count() {
                issues.push(ValidationIssue::VertexIndexOutOfRange {
                    triangle: i,
                    index,
                    count: model.vertex_count(),
                });
            }
        }
        for &index in &triangle.tex_coord_indices {
            if usize::from(index) >= model.tex_coord_count() {
                issues.push(ValidationIssue::TexCoordIndexOutOfRange {
                    triangle: i,
                    index,
                    count: model.tex_coord_count(),
                });
            }
        }
    }

    for (f, frame) in model.frames().iter().enumerate() {
        for (v, vertex) in frame.vertices.iter().enumerate() {
            if usize::from(vertex.normal_index) >= NORMAL_COUNT {
                issues.push(ValidationIssue::NormalIndexOutOfRange {
                    frame: f,
                    vertex: v,
                    index: vertex.normal_index,
                });
            }
        }
    }

    for issue in &issues {
        warn!("{issue}");
    }

    ValidationReport { issues }
}

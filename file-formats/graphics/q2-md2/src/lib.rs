//! Loader and keyframe animation player for Quake II MD2 models.
//!
//! An MD2 file holds a triangle mesh stored as a series of keyframes. Every
//! frame quantizes its vertex positions to bytes and its normals to indices
//! into a fixed table. This crate parses such a file into an [`Md2Model`],
//! plays the fixed animation sequences with a [`PlaybackState`], and
//! produces an interpolated triangle-list [`Vertex`] stream for any point in
//! time.
//!
//! Textures are not loaded; [`Skin`] only names them.
//!
//! # Examples
//!
//! ```no_run
//! use q2_md2::{Md2Model, PlaybackState, generate_vertex_vec};
//!
//! let model = Md2Model::load("tris.md2").unwrap();
//! let mut state = PlaybackState::new();
//!
//! state.next_animation();
//! state.update(0.25);
//!
//! let vertices = generate_vertex_vec(&model, &state);
//! assert_eq!(vertices.len(), model.triangle_count() * 3);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod animation;
pub mod error;
pub mod header;
pub mod model;
pub mod normals;
pub mod playback;
pub mod player;
pub mod types;
pub mod validation;
pub mod vertex;

// Re-export common types
pub use animation::{ANIMATIONS, Animation, AnimationDescriptor, REQUIRED_FRAME_COUNT};
pub use error::{DataError, Md2Error, Result};
pub use header::Md2Header;
pub use model::Md2Model;
pub use playback::{Interpolation, PlaybackState};
pub use player::Md2Player;
pub use types::{CompressedVertex, Frame, Skin, TexCoord, Triangle};
pub use validation::{ValidationIssue, ValidationReport, validate_model};
pub use vertex::{Vertex, generate_vertex_vec, generate_vertices};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

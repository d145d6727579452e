//! Model and playback state bundled behind one interface

use std::path::Path;

use crate::animation::Animation;
use crate::error::Result;
use crate::model::Md2Model;
use crate::playback::PlaybackState;
use crate::vertex::{Vertex, generate_vertices};

/// An MD2 model together with its playback state
///
/// # Examples
///
/// ```rust,no_run
/// use q2_md2::{Md2Player, Vertex};
///
/// let mut player = Md2Player::load("knight.md2").unwrap();
/// let mut vertices = vec![Vertex::default(); player.vertex_stream_len()];
///
/// player.next_animation();
/// player.update(1.0 / 60.0);
/// player.generate_vertices(&mut vertices);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Md2Player {
    model: Md2Model,
    playback: PlaybackState,
}

impl Md2Player {
    /// Load a model and start playing its first sequence
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Md2Model::load(path)?))
    }

    /// Wrap an already loaded model
    pub fn new(model: Md2Model) -> Self {
        Self {
            model,
            playback: PlaybackState::new(),
        }
    }

    /// Replace the model with another file, keeping the playback state
    ///
    /// On failure the player holds an empty model.
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.model.reload(path)
    }

    pub fn model(&self) -> &Md2Model {
        &self.model
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackState {
        &mut self.playback
    }

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn next_animation(&mut self) {
        self.playback.next_animation();
    }

    pub fn previous_animation(&mut self) {
        self.playback.previous_animation();
    }

    /// Advance playback by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.playback.update(dt);
    }

    pub fn active_animation(&self) -> Animation {
        self.playback.animation()
    }

    pub fn active_animation_name(&self) -> &'static str {
        self.playback.animation().name()
    }

    /// Fill `out` with the vertex stream for the current cursor
    ///
    /// # Panics
    ///
    /// See [`generate_vertices`].
    pub fn generate_vertices(&self, out: &mut [Vertex]) {
        generate_vertices(&self.model, &self.playback, out);
    }

    pub fn vertex_stream_len(&self) -> usize {
        self.model.vertex_stream_len()
    }

    pub fn vertex_count(&self) -> usize {
        self.model.vertex_count()
    }

    pub fn skin_count(&self) -> usize {
        self.model.skin_count()
    }

    pub fn tex_coord_count(&self) -> usize {
        self.model.tex_coord_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.model.triangle_count()
    }

    pub fn frame_count(&self) -> usize {
        self.model.frame_count()
    }

    pub fn skin_width(&self) -> i32 {
        self.model.skin_width()
    }

    pub fn skin_height(&self) -> i32 {
        self.model.skin_height()
    }
}

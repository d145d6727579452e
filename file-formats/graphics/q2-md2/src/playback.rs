//! Animation playback state
//!
//! The state machine cycles through the fixed [`Animation`] table. Time is
//! supplied by the caller through [`PlaybackState::update`]; there is no
//! internal clock.

use log::trace;

use crate::animation::{Animation, AnimationDescriptor};
#[cfg(feature = "serde-support")]
use crate::error::DataError;

/// Playback state of one animated model
///
/// With `serde-support`, deserialized states are checked the same way
/// [`PlaybackState::set_animation`] and [`PlaybackState::update`] keep them:
/// the cursor must lie in its animation's frames and the speed must be a
/// finite, non-negative number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(try_from = "PlaybackStateData"))]
pub struct PlaybackState {
    animation: Animation,
    /// Fractional frame index; the fraction is the blend weight toward the next frame
    cursor: f32,
    speed: f32,
    playing: bool,
}

/// Frames to blend for one cursor position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    /// Frame the cursor is in
    pub frame_a: usize,
    /// Frame blended toward, wrapping to the sequence start after its end
    pub frame_b: usize,
    /// Weight of `frame_b`
    pub lerp: f32,
}

impl PlaybackState {
    /// Create a state playing [`Animation::Stand`] from frame 0 at normal speed
    pub fn new() -> Self {
        Self {
            animation: Animation::Stand,
            cursor: 0.0,
            speed: 1.0,
            playing: true,
        }
    }

    /// Resume playback
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Pause playback; the cursor stays where it is
    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Active sequence
    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// Descriptor of the active sequence
    pub fn descriptor(&self) -> &'static AnimationDescriptor {
        self.animation.descriptor()
    }

    /// Current fractional frame index
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Playback speed multiplier
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the playback speed multiplier
    ///
    /// Playback only runs forward: negative and non-finite values are
    /// clamped to `0.0`, which holds the cursor in place.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
    }

    /// Switch to `animation` and rewind to its first frame
    pub fn set_animation(&mut self, animation: Animation) {
        self.animation = animation;
        self.cursor = f32::from(animation.descriptor().start);
        trace!("Switched to animation '{}' at frame {}", animation, self.cursor);
    }

    /// Switch to the following sequence, wrapping after the last one
    pub fn next_animation(&mut self) {
        self.set_animation(self.animation.next());
    }

    /// Switch to the preceding sequence, wrapping before the first one
    pub fn previous_animation(&mut self) {
        self.set_animation(self.animation.previous());
    }

    /// Advance the cursor by `dt` seconds
    ///
    /// Does nothing while paused. Once the cursor reaches the last frame of
    /// the sequence it is wrapped back into the sequence, keeping its
    /// fractional part. A single call may cover any number of loops.
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let sequence = self.descriptor();
        self.cursor += self.speed * dt * sequence.fps;

        let start = f32::from(sequence.start);
        if self.cursor >= f32::from(sequence.end) {
            let whole = self.cursor.trunc();
            let frac = self.cursor - whole;
            let frame_count = f32::from(sequence.frame_count());
            let frame = (whole - start).rem_euclid(frame_count) + start;
            // A fraction just below 1.0 may round up into the following frame.
            self.cursor = (frame + frac).min((frame + 1.0).next_down());
        }
    }

    /// Frames and blend weight for the current cursor
    pub fn interpolation(&self) -> Interpolation {
        let sequence = self.descriptor();
        let whole = self.cursor.floor();
        let frame_a = whole as usize;
        let frame_b = if frame_a == usize::from(sequence.end) {
            usize::from(sequence.start)
        } else {
            frame_a + 1
        };
        Interpolation {
            frame_a,
            frame_b,
            lerp: self.cursor - whole,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked field layout of a serialized [`PlaybackState`]
#[cfg(feature = "serde-support")]
#[derive(serde::Deserialize)]
struct PlaybackStateData {
    animation: Animation,
    cursor: f32,
    speed: f32,
    playing: bool,
}

#[cfg(feature = "serde-support")]
impl TryFrom<PlaybackStateData> for PlaybackState {
    type Error = DataError;

    fn try_from(data: PlaybackStateData) -> Result<Self, Self::Error> {
        if !data.speed.is_finite() || data.speed < 0.0 {
            return Err(DataError::BadSpeed(data.speed));
        }

        let sequence = data.animation.descriptor();
        let start = f32::from(sequence.start);
        let end = f32::from(sequence.end);
        if !(start..end + 1.0).contains(&data.cursor) {
            return Err(DataError::CursorOutOfRange {
                animation: sequence.name,
                cursor: data.cursor,
                start: sequence.start,
                end: sequence.end,
            });
        }

        Ok(Self {
            animation: data.animation,
            cursor: data.cursor,
            speed: data.speed,
            playing: data.playing,
        })
    }
}

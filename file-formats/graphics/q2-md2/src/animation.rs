//! Fixed MD2 animation sequences
//!
//! MD2 files do not describe their animations. Player models follow one
//! frame layout, so the sequences are a fixed table shared by every model.

use std::fmt;

/// Descriptor of one animation sequence
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct AnimationDescriptor {
    /// Display name of the sequence
    pub name: &'static str,
    /// First frame index
    pub start: u16,
    /// Last frame index (inclusive)
    pub end: u16,
    /// Playback rate in frames per second
    pub fps: f32,
}

impl AnimationDescriptor {
    /// Number of frames in the sequence
    pub const fn frame_count(&self) -> u16 {
        self.end - self.start + 1
    }

    /// Check whether a frame index belongs to this sequence
    pub fn contains(&self, frame: usize) -> bool {
        (usize::from(self.start)..=usize::from(self.end)).contains(&frame)
    }
}

/// Number of animation sequences
pub const ANIMATION_COUNT: usize = 21;

/// The fixed animation table, in [`Animation`] order
#[rustfmt::skip]
pub const ANIMATIONS: [AnimationDescriptor; ANIMATION_COUNT] = [
    AnimationDescriptor { name: "stand", start: 0, end: 39, fps: 9.0 },
    AnimationDescriptor { name: "run", start: 40, end: 45, fps: 10.0 },
    AnimationDescriptor { name: "attack", start: 46, end: 53, fps: 10.0 },
    AnimationDescriptor { name: "pain_a", start: 54, end: 57, fps: 7.0 },
    AnimationDescriptor { name: "pain_b", start: 58, end: 61, fps: 7.0 },
    AnimationDescriptor { name: "pain_c", start: 62, end: 65, fps: 7.0 },
    AnimationDescriptor { name: "jump", start: 66, end: 71, fps: 7.0 },
    AnimationDescriptor { name: "flip", start: 72, end: 83, fps: 7.0 },
    AnimationDescriptor { name: "salute", start: 84, end: 94, fps: 7.0 },
    AnimationDescriptor { name: "fallback", start: 95, end: 111, fps: 10.0 },
    AnimationDescriptor { name: "wave", start: 112, end: 122, fps: 7.0 },
    AnimationDescriptor { name: "point", start: 123, end: 134, fps: 6.0 },
    AnimationDescriptor { name: "crouch_stand", start: 135, end: 153, fps: 10.0 },
    AnimationDescriptor { name: "crouch_walk", start: 154, end: 159, fps: 7.0 },
    AnimationDescriptor { name: "crouch_attack", start: 160, end: 168, fps: 10.0 },
    AnimationDescriptor { name: "crouch_pain", start: 169, end: 172, fps: 7.0 },
    AnimationDescriptor { name: "crouch_death", start: 173, end: 177, fps: 5.0 },
    AnimationDescriptor { name: "death_fallback", start: 178, end: 183, fps: 7.0 },
    AnimationDescriptor { name: "death_fallforward", start: 184, end: 189, fps: 7.0 },
    AnimationDescriptor { name: "death_fallbackslow", start: 190, end: 197, fps: 7.0 },
    AnimationDescriptor { name: "boom", start: 198, end: 198, fps: 5.0 },
];

/// Number of frames a model must carry to play every sequence
pub const REQUIRED_FRAME_COUNT: usize = ANIMATIONS[ANIMATION_COUNT - 1].end as usize + 1;

/// Animation sequence identifier
///
/// Cycling with [`Animation::next`] and [`Animation::previous`] wraps around
/// the table in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Animation {
    #[default]
    Stand = 0,
    Run,
    Attack,
    PainA,
    PainB,
    PainC,
    Jump,
    Flip,
    Salute,
    Fallback,
    Wave,
    Point,
    CrouchStand,
    CrouchWalk,
    CrouchAttack,
    CrouchPain,
    CrouchDeath,
    DeathFallback,
    DeathFallForward,
    DeathFallBackSlow,
    Boom,
}

impl Animation {
    /// All sequences in table order
    pub const ALL: [Self; ANIMATION_COUNT] = [
        Self::Stand,
        Self::Run,
        Self::Attack,
        Self::PainA,
        Self::PainB,
        Self::PainC,
        Self::Jump,
        Self::Flip,
        Self::Salute,
        Self::Fallback,
        Self::Wave,
        Self::Point,
        Self::CrouchStand,
        Self::CrouchWalk,
        Self::CrouchAttack,
        Self::CrouchPain,
        Self::CrouchDeath,
        Self::DeathFallback,
        Self::DeathFallForward,
        Self::DeathFallBackSlow,
        Self::Boom,
    ];

    /// Position of this sequence in the table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sequence at a table position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Frame range and rate of this sequence
    pub fn descriptor(self) -> &'static AnimationDescriptor {
        &ANIMATIONS[self.index()]
    }

    /// Display name of this sequence
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// The following sequence, wrapping from the last to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % ANIMATION_COUNT]
    }

    /// The preceding sequence, wrapping from the first to the last
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + ANIMATION_COUNT - 1) % ANIMATION_COUNT]
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

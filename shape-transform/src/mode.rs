//! The closed transform palette and its catalog metadata.

use crate::TransformError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the nine named geometric remappings.
///
/// The ordinals are part of the persisted level format and must not be
/// reordered.
///
/// # Example
///
/// ```
/// use shape_transform::TransformMode;
///
/// let mode = TransformMode::try_from(5).unwrap();
/// assert_eq!(mode, TransformMode::Wavy);
/// assert_eq!(mode.name(), "Wavy");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TransformMode {
    /// No remapping; only the shared re-centering step applies.
    #[default]
    None = 0,
    /// X becomes the angle around the grid center, Z the distance from it.
    Circular = 1,
    /// Like `Circular`, with the circle expanded to the unit square.
    CircularSquared = 2,
    /// Widens along the X axis.
    Stretch = 3,
    /// Compresses along the X axis.
    Shrink = 4,
    /// Smooth periodic ripple along Z as a function of X.
    Wavy = 5,
    /// Triangle-wave ripple along Z as a function of X.
    WavySharp = 6,
    /// Tilts X sideways proportionally to Z.
    Shear = 7,
    /// Uniform scale on all three axes.
    Expand = 8,
}

impl TransformMode {
    /// Every mode, in ordinal order.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Circular,
        Self::CircularSquared,
        Self::Stretch,
        Self::Shrink,
        Self::Wavy,
        Self::WavySharp,
        Self::Shear,
        Self::Expand,
    ];

    /// The ordinal used by the level format.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display name shown in the transform catalog.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Circular => "Circular",
            Self::CircularSquared => "Circular Squared",
            Self::Stretch => "Stretch",
            Self::Shrink => "Shrink",
            Self::Wavy => "Wavy",
            Self::WavySharp => "Wavy Sharp",
            Self::Shear => "Shear",
            Self::Expand => "Expand",
        }
    }

    /// One-line description shown in the transform catalog.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "Leaves the shape unchanged.",
            Self::Circular => {
                "Transforms the X axis into the angle from the center and the Z axis into the distance from the center."
            }
            Self::CircularSquared => {
                "Transforms the X axis into the angle from the center and the Z axis into the distance from the center, expanded as a square."
            }
            Self::Stretch => "Stretches on the X axis.",
            Self::Shrink => "Compresses on the X axis.",
            Self::Wavy => "Adds smooth wave distortions.",
            Self::WavySharp => "Adds sharp-edged wave distortions.",
            Self::Shear => "Tilts sideways.",
            Self::Expand => "Expands in all directions.",
        }
    }

    /// Look up a mode by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }
}

impl TryFrom<u8> for TransformMode {
    type Error = TransformError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(TransformError::UnknownMode(ordinal))
    }
}

use crate::math::Real;
use crate::tonality::{Note, PitchClass};

/// Error returned by [`LatticeConfig::validate`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The edge length is zero, negative or not finite.
    #[error("the edge length must be strictly positive and finite (got {0})")]
    NonPositiveEdgeLength(Real),
    /// The maximum pick distance is zero, negative or NaN.
    #[error("the maximum pick distance must be strictly positive (got {0})")]
    NonPositivePickDistance(Real),
}

/// What happens when attaching on a face that already has a neighbor.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttachmentPolicy {
    /// The action is ignored and nothing is spawned.
    #[default]
    RejectOccupied,
    /// A new cell is spawned anyway, overlapping the existing neighbor.
    AllowDuplicates,
}

/// Parameters of a [`Lattice`](crate::lattice::Lattice).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatticeConfig {
    /// The edge length shared by every cell.
    pub edge_length: Real,
    /// The chord of the root cell.
    pub root_chord: [Note; 4],
    /// Hits further than this along the pointer ray are ignored.
    pub max_pick_distance: Real,
    /// How actions on occupied faces are handled.
    pub attachment_policy: AttachmentPolicy,
    /// Whether the vertices and face normals of each new cell are sent to the debug sink.
    pub debug_draw: bool,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        LatticeConfig {
            edge_length: 1.0,
            root_chord: [
                Note::new(PitchClass::C, 4),
                Note::new(PitchClass::E, 4),
                Note::new(PitchClass::G, 4),
                Note::new(PitchClass::B, 4),
            ],
            max_pick_distance: Real::MAX,
            attachment_policy: AttachmentPolicy::default(),
            debug_draw: false,
        }
    }
}

impl LatticeConfig {
    /// Checks that this configuration can build a lattice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.edge_length.is_finite() || self.edge_length <= 0.0 {
            return Err(ConfigError::NonPositiveEdgeLength(self.edge_length));
        }

        if self.max_pick_distance.is_nan() || self.max_pick_distance <= 0.0 {
            return Err(ConfigError::NonPositivePickDistance(self.max_pick_distance));
        }

        Ok(())
    }
}

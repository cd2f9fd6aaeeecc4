use std::cmp::Ordering;

pub use rosu_map::util::Pos;

/// All hitobject related data required for strain estimation.
///
/// Geometry is expected in playfield coordinates; producing it from a
/// beatmap is the job of a preprocessing stage, not of this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner)
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner,
}

/// Pre-computed cursor path summary of a slider.
///
/// The lazy values describe the minimal movement a player must perform to
/// keep tracking the slider body. They are produced alongside the rest of
/// the object geometry during preprocessing.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    /// Distance the cursor lazily travels along the body.
    pub lazy_travel_dist: f64,
    /// Time in milliseconds spent travelling that distance.
    pub lazy_travel_time: f64,
}

use crate::difficulty::object::DifficultyObject;

use self::strain::StrainSkill;

pub use self::{aim_snap::AimSnap, tap_stamina::TapStamina};

mod aim_snap;
pub mod strain;
mod tap_stamina;

/// The strain skills of a single calculation.
pub struct Skills {
    pub aim_snap: AimSnap,
    pub tap_stamina: TapStamina,
}

impl Skills {
    pub fn new() -> Self {
        Self {
            aim_snap: AimSnap::new(),
            tap_stamina: TapStamina::new(),
        }
    }

    pub fn process(&mut self, curr: &DifficultyObject<'_>, diff_objects: &[DifficultyObject<'_>]) {
        self.aim_snap.process(curr, diff_objects);
        self.tap_stamina.process(curr, diff_objects);
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self::new()
    }
}

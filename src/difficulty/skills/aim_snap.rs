use crate::difficulty::{evaluators::AimSnapEvaluator, object::DifficultyObject};

use super::strain::{StrainAccumulator, StrainSkill, StrainValue};

/// Skill of aiming every object of a map with uniform circle size and
/// normalized distances, under the snap/flow movement model.
#[derive(Clone, Debug)]
pub struct AimSnap {
    strain: StrainAccumulator,
}

impl AimSnap {
    pub fn new() -> Self {
        Self {
            strain: StrainAccumulator::new(AimSnapEvaluator::DEFAULT_STRAIN_DECAY),
        }
    }
}

impl Default for AimSnap {
    fn default() -> Self {
        Self::new()
    }
}

impl StrainSkill for AimSnap {
    const SKILL_MULTIPLIER: f64 = 2500.0;
    const STAR_MULTIPLIER_PER_REPEAT: f64 = 1.05;

    fn strain_value_of(
        &mut self,
        curr: &DifficultyObject<'_>,
        diff_objects: &[DifficultyObject<'_>],
    ) -> StrainValue {
        AimSnapEvaluator::evaluate_diff_of(curr, diff_objects, self.strain.decay_rate())
    }

    fn accumulator(&self) -> &StrainAccumulator {
        &self.strain
    }

    fn accumulator_mut(&mut self) -> &mut StrainAccumulator {
        &mut self.strain
    }

    fn into_accumulator(self) -> StrainAccumulator {
        self.strain
    }
}

use crate::difficulty::{evaluators::TapStaminaEvaluator, object::DifficultyObject};

use super::strain::{StrainAccumulator, StrainSkill, StrainValue};

/// Skill of keeping up with the rate at which objects need to be tapped.
///
/// Unlike aim, this skill carries a repeat-pattern counter across calls;
/// the counter belongs to the instance and resets with it, never to any
/// process-wide storage.
#[derive(Clone, Debug)]
pub struct TapStamina {
    strain: StrainAccumulator,
    repeat_strain_count: u32,
}

impl TapStamina {
    const DEFAULT_STRAIN_DECAY: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            strain: StrainAccumulator::new(Self::DEFAULT_STRAIN_DECAY),
            repeat_strain_count: 0,
        }
    }

    /// How many consecutive objects kept (close to) the same strain time.
    pub const fn repeat_strain_count(&self) -> u32 {
        self.repeat_strain_count
    }
}

impl Default for TapStamina {
    fn default() -> Self {
        Self::new()
    }
}

impl StrainSkill for TapStamina {
    const SKILL_MULTIPLIER: f64 = 2.5;
    const STAR_MULTIPLIER_PER_REPEAT: f64 = 1.01;

    fn strain_value_of(
        &mut self,
        curr: &DifficultyObject<'_>,
        diff_objects: &[DifficultyObject<'_>],
    ) -> StrainValue {
        let current_decay_rate = self.strain.decay_rate();

        let value = TapStaminaEvaluator::evaluate_diff_of(
            curr,
            diff_objects,
            &mut self.repeat_strain_count,
            current_decay_rate,
        );

        StrainValue {
            strain: value.strain,
            decay_rate: value.decay_rate,
        }
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

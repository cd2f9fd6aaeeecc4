use crate::difficulty::object::DifficultyObject;

/// Outcome of evaluating a single object.
///
/// The decay rate is recomputed from the current object's timing on every
/// call and returned alongside the strain, so the accumulator always decays
/// the running total at the rate appropriate for *this* transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrainValue {
    pub strain: f64,
    pub decay_rate: f64,
}

/// A strain skill following the decay-accumulation model.
///
/// Skills carry small mutable state (the live decay rate, per-skill
/// counters), so a fresh instance is required for every independent
/// calculation.
pub trait StrainSkill: Sized {
    /// Multiplier applied to each evaluated strain before accumulation.
    const SKILL_MULTIPLIER: f64;
    /// Star rating multiplier per repetition of a pattern, consumed by the
    /// rating stage further up.
    const STAR_MULTIPLIER_PER_REPEAT: f64;

    /// The unweighted strain of the current object together with the decay
    /// rate to apply for this transition.
    fn strain_value_of(
        &mut self,
        curr: &DifficultyObject<'_>,
        diff_objects: &[DifficultyObject<'_>],
    ) -> StrainValue;

    fn accumulator(&self) -> &StrainAccumulator;

    fn accumulator_mut(&mut self) -> &mut StrainAccumulator;

    fn into_accumulator(self) -> StrainAccumulator;

    /// Evaluate the current object and fold it into the running strain.
    fn process(&mut self, curr: &DifficultyObject<'_>, diff_objects: &[DifficultyObject<'_>]) {
        let value = self.strain_value_of(curr, diff_objects);

        self.accumulator_mut()
            .accumulate(curr.delta_time, value, Self::SKILL_MULTIPLIER);
    }

    /// The decay rate reported by the most recent evaluation.
    fn decay_rate(&self) -> f64 {
        self.accumulator().decay_rate()
    }

    /// The running strain after the most recent object.
    fn current_strain(&self) -> f64 {
        self.accumulator().current_strain()
    }

    /// The running strain logged after each processed object.
    fn object_strains(&self) -> &[f64] {
        self.accumulator().object_strains()
    }

    fn into_object_strains(self) -> Vec<f64> {
        self.into_accumulator().into_object_strains()
    }
}

/// Running decayed strain total plus its per-object log.
#[derive(Clone, Debug, Default)]
pub struct StrainAccumulator {
    current_strain: f64,
    decay_rate: f64,
    object_strains: Vec<f64>,
}

impl StrainAccumulator {
    pub fn new(initial_decay_rate: f64) -> Self {
        Self {
            current_strain: 0.0,
            decay_rate: initial_decay_rate,
            object_strains: Vec::with_capacity(64),
        }
    }

    /// `running = running * decay_rate^(delta_time / 1000) + strain * multiplier`
    pub fn accumulate(&mut self, delta_time: f64, value: StrainValue, skill_multiplier: f64) {
        self.decay_rate = value.decay_rate;
        self.current_strain *= strain_decay(delta_time, value.decay_rate);
        self.current_strain += value.strain * skill_multiplier;
        self.object_strains.push(self.current_strain);
    }

    pub const fn current_strain(&self) -> f64 {
        self.current_strain
    }

    pub const fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    pub fn object_strains(&self) -> &[f64] {
        &self.object_strains
    }

    pub fn into_object_strains(self) -> Vec<f64> {
        self.object_strains
    }
}

pub fn strain_decay(ms: f64, decay_base: f64) -> f64 {
    f64::powf(decay_base, ms / 1000.0)
}

use crate::model::hit_object::HitObject;

use self::{object::DifficultyObject, scaling_factor::ScalingFactor, skills::Skills};

pub mod evaluators;
pub mod object;
pub mod scaling_factor;
pub mod skills;

/// Strain evaluation of a full object sequence.
///
/// Objects are fed through a fresh pair of skills in strict sequence order.
/// Skills carry cross-call state, so a [`DifficultyValues`] must not be
/// reused across independent calculations.
pub struct DifficultyValues {
    pub skills: Skills,
}

impl DifficultyValues {
    pub fn calculate(hit_objects: &[HitObject], cs: f64) -> Self {
        let scaling_factor = ScalingFactor::new(cs);
        let diff_objects = Self::create_difficulty_objects(hit_objects, &scaling_factor);

        let mut skills = Skills::new();

        for curr in &diff_objects {
            skills.process(curr, &diff_objects);
        }

        Self { skills }
    }

    /// Annotate raw hitobjects with the geometric features the skills
    /// consume.
    ///
    /// The first hitobject has no difficulty object.
    pub fn create_difficulty_objects<'a>(
        hit_objects: &'a [HitObject],
        scaling_factor: &ScalingFactor,
    ) -> Vec<DifficultyObject<'a>> {
        let Some(mut last) = hit_objects.first() else {
            return Vec::new();
        };

        let mut last_last = None;
        let mut diff_objects = Vec::with_capacity(hit_objects.len().saturating_sub(1));

        for (idx, h) in hit_objects.iter().skip(1).enumerate() {
            let diff_object = DifficultyObject::new(h, last, last_last, idx, scaling_factor);

            last_last = Some(last);
            last = h;

            diff_objects.push(diff_object);
        }

        diff_objects
    }
}

use crate::{
    difficulty::{
        skills::{strain::StrainSkill, Skills},
        DifficultyValues,
    },
    model::hit_object::HitObject,
};

/// The result of calculating the strains of every object.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct Strains {
    /// Running strain of the aim snap skill, one entry per object past the
    /// first.
    pub aim_snap: Vec<f64>,
    /// Running strain of the tap stamina skill, one entry per object past
    /// the first.
    pub tap_stamina: Vec<f64>,
}

/// Calculate the per-object running strain of both skills.
///
/// `cs` is the map's circle size, from which the effective object radius
/// and the distance normalization are derived.
pub fn strains(hit_objects: &[HitObject], cs: f64) -> Strains {
    let DifficultyValues {
        skills:
            Skills {
                aim_snap,
                tap_stamina,
            },
    } = DifficultyValues::calculate(hit_objects, cs);

    Strains {
        aim_snap: aim_snap.into_object_strains(),
        tap_stamina: tap_stamina.into_object_strains(),
    }
}

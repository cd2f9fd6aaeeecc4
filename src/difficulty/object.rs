use rosu_map::util::Pos;

use crate::model::hit_object::HitObject;

use super::scaling_factor::ScalingFactor;

/// A [`HitObject`] annotated with the geometric features the strain skills
/// consume.
///
/// Difficulty objects are immutable once constructed; skills only ever read
/// them through a rolling history of the current object plus the two
/// preceding ones.
pub struct DifficultyObject<'a> {
    pub idx: usize,
    pub base: &'a HitObject,
    pub start_time: f64,

    /// Milliseconds since the previous object, unclamped.
    pub delta_time: f64,
    /// [`Self::delta_time`] clamped to at least [`Self::MIN_DELTA_TIME`].
    ///
    /// The clamp keeps the aim time-normalization factor away from its
    /// 40 ms singularity.
    pub strain_time: f64,
    /// Circle-size-normalized distance moved to reach this object, in units
    /// of normalized diameters.
    pub jump_dist: f64,
    /// Raw displacement from the previous object's position.
    pub dist_vector: Pos,
    /// Absolute angle at the previous object between the incoming and
    /// outgoing path; `None` for the first two objects or around spinners.
    pub angle: Option<f64>,
    /// Effective hit object radius.
    pub radius: f64,
}

impl<'a> DifficultyObject<'a> {
    pub const NORMALIZED_RADIUS: i32 = 52;
    pub const NORMALIZED_DIAMETER: i32 = Self::NORMALIZED_RADIUS * 2;

    pub const MIN_DELTA_TIME: f64 = 50.0;

    pub fn new(
        hit_object: &'a HitObject,
        last_object: &'a HitObject,
        last_last_object: Option<&HitObject>,
        idx: usize,
        scaling_factor: &ScalingFactor,
    ) -> Self {
        let delta_time = hit_object.start_time - last_object.start_time;
        let strain_time = delta_time.max(Self::MIN_DELTA_TIME);

        let mut this = Self {
            idx,
            base: hit_object,
            start_time: hit_object.start_time,
            delta_time,
            strain_time,
            jump_dist: 0.0,
            dist_vector: Pos::default(),
            angle: None,
            radius: scaling_factor.radius,
        };

        this.set_distances(last_object, last_last_object, scaling_factor);

        this
    }

    /// The object `backwards_idx` positions before this one, if already
    /// processed; `previous(0, ..)` is the most recent past object.
    pub fn previous<'o>(
        &self,
        backwards_idx: usize,
        diff_objects: &'o [Self],
    ) -> Option<&'o Self> {
        self.idx
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }

    fn set_distances(
        &mut self,
        last_object: &HitObject,
        last_last_object: Option<&HitObject>,
        scaling_factor: &ScalingFactor,
    ) {
        // Spinners neither require nor permit cursor movement.
        if self.base.is_spinner() || last_object.is_spinner() {
            return;
        }

        let factor = scaling_factor.factor;

        self.dist_vector = self.base.pos - last_object.pos;
        self.jump_dist = f64::from((self.base.pos * factor - last_object.pos * factor).length())
            / f64::from(Self::NORMALIZED_DIAMETER);

        let Some(last_last_object) = last_last_object else {
            return;
        };

        if last_last_object.is_spinner() {
            return;
        }

        let v1 = last_last_object.pos - last_object.pos;
        let v2 = self.base.pos - last_object.pos;

        let dot = v1.dot(v2);
        let det = v1.x * v2.y - v1.y * v2.x;

        self.angle = Some(f64::from(det).atan2(f64::from(dot)).abs());
    }
}

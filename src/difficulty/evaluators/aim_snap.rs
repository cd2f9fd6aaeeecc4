use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, SQRT_2};

use rosu_map::util::Pos;

use crate::{
    difficulty::{object::DifficultyObject, skills::strain::StrainValue},
    model::hit_object::HitObjectKind,
    util::difficulty::erf,
};

pub struct AimSnapEvaluator;

impl AimSnapEvaluator {
    /// Damping applied to the previous velocity vector before it is
    /// reconciled with the current one.
    const PREV_VELOCITY_MULTIPLIER: f32 = 0.45;
    /// Turns of 60° or more break the straight-path assumption.
    const WIDE_TURN_THRESHOLD: f64 = FRAC_PI_3;
    /// Standard deviation of the snap/flow decision distribution.
    const DISTRIBUTION_WIDTH: f64 = 25.0;

    /// Initial decay rate, before any history has been evaluated.
    pub const DEFAULT_STRAIN_DECAY: f64 = 0.2;

    /// Evaluate the current object.
    ///
    /// `current_decay_rate` is reported back unchanged whenever there is
    /// nothing to evaluate.
    pub fn evaluate_diff_of(
        curr: &DifficultyObject<'_>,
        diff_objects: &[DifficultyObject<'_>],
        current_decay_rate: f64,
    ) -> StrainValue {
        let default = StrainValue {
            strain: 0.0,
            decay_rate: current_decay_rate,
        };

        if curr.base.is_spinner() {
            return default;
        }

        // Difficulty is awarded for the transition *into* the most recent
        // past object; the newest object only hints at the upcoming pattern.
        let (Some(osu_prev_obj), Some(osu_curr_obj)) =
            (curr.previous(1, diff_objects), curr.previous(0, diff_objects))
        else {
            return default;
        };

        let osu_next_obj = curr;

        // Decay by object count rather than wall-clock time: a repeated
        // pattern caps out around 85% of its maximum difficulty after 12
        // objects, regardless of tempo.
        let decay_rate = 0.85_f64.powf(1000.0 / osu_curr_obj.strain_time.min(500.0));

        let angle = osu_curr_obj.angle.unwrap_or(0.0);

        // Subtract the distance a flowing motion covers for free from the
        // observed jump distance, then scale by the time deficit; the result
        // discriminates snappy from flowy transitions.
        let flow_dist = osu_next_obj.jump_dist.min(FRAC_PI_2).sin().powi(2)
            * (0.5 * osu_curr_obj.jump_dist)
            * (angle / 2.0).sin().powi(2);
        let x = (osu_curr_obj.jump_dist - flow_dist) * (osu_curr_obj.delta_time - 50.0);

        // Wider circles raise the threshold at which a movement reads as a
        // deliberate snap.
        let distribution_mean = 65.0_f64.max(65.0 + 2.0 * (32.0 - osu_curr_obj.radius));

        // Probability in [0, 1] that the movement is an aim-and-stop.
        let snappiness =
            0.5 * erf((x - distribution_mean) / (Self::DISTRIBUTION_WIDTH * SQRT_2)) + 0.5;

        let prev_vector = osu_prev_obj.dist_vector
            * (1.0 / osu_prev_obj.strain_time as f32)
            * Self::PREV_VELOCITY_MULTIPLIER;
        let curr_vector = osu_curr_obj.dist_vector * (1.0 / osu_curr_obj.strain_time as f32);

        let slider_velocity = if let HitObjectKind::Slider(ref slider) = osu_prev_obj.base.kind {
            (slider.lazy_travel_dist.max(1.0) / 50.0) / (50.0 + slider.lazy_travel_time)
        } else {
            0.0
        };

        let adj_velocity = if angle < Self::WIDE_TURN_THRESHOLD {
            // Near-straight path: only the change in speed is difficult.
            f64::from((curr_vector.length() - prev_vector.length()).abs())
        } else {
            // A sharp turn can be reconciled by bending the incoming motion
            // either way; keep whichever combined movement is cheapest.
            let rot_pos = Self::rotate(prev_vector, Self::WIDE_TURN_THRESHOLD as f32);
            let rot_neg = Self::rotate(prev_vector, -(Self::WIDE_TURN_THRESHOLD as f32));

            f64::from(
                curr_vector
                    .length()
                    .min((curr_vector + rot_pos).length())
                    .min((curr_vector + rot_neg).length()),
            )
        };

        // `strain_time` stays above `MIN_DELTA_TIME` by construction; the
        // epsilon floor keeps a misbehaving caller from producing infinite
        // strain at the 40ms singularity.
        let time_factor =
            ((osu_curr_obj.strain_time - 40.0) / osu_curr_obj.strain_time).max(f64::EPSILON);
        let adj_velocity = adj_velocity / time_factor;

        let strain =
            (adj_velocity + slider_velocity + (adj_velocity * slider_velocity).sqrt()) * snappiness;

        debug_assert!(!strain.is_nan());

        StrainValue { strain, decay_rate }
    }

    fn rotate(v: Pos, theta: f32) -> Pos {
        let (sin, cos) = theta.sin_cos();

        Pos::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }
}

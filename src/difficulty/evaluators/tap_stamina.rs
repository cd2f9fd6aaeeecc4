use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use crate::{difficulty::object::DifficultyObject, util::difficulty::erf};

pub struct TapStaminaEvaluator;

/// Outcome of evaluating an object for tapping stamina.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapStaminaStrain {
    pub strain: f64,
    pub decay_rate: f64,
    /// Probability that the transition is played as flow rather than snap.
    ///
    /// Computed for inspection and calibration; it is deliberately not
    /// folded into [`Self::strain`].
    pub flow_prob: f64,
}

impl TapStaminaEvaluator {
    /// Jump distances below this many normalized diameters are always
    /// comfortable to flow through.
    const FLOW_DIST_THRESHOLD: f64 = 0.75;
    /// Consecutive strain times within this tolerance in milliseconds count
    /// as a repeat of the same rhythm.
    const REPEAT_TOLERANCE: f64 = 10.0;

    /// Evaluate the current object.
    ///
    /// `repeat_strain_count` is the calling skill's repeat-pattern counter;
    /// `current_decay_rate` is reported back unchanged whenever there is
    /// nothing to evaluate.
    pub fn evaluate_diff_of(
        curr: &DifficultyObject<'_>,
        diff_objects: &[DifficultyObject<'_>],
        repeat_strain_count: &mut u32,
        current_decay_rate: f64,
    ) -> TapStaminaStrain {
        let default = TapStaminaStrain {
            strain: 0.0,
            decay_rate: current_decay_rate,
            flow_prob: 1.0,
        };

        if curr.base.is_spinner() {
            return default;
        }

        let (Some(osu_prev_obj), Some(osu_curr_obj)) =
            (curr.previous(1, diff_objects), curr.previous(0, diff_objects))
        else {
            return default;
        };

        let osu_next_obj = curr;

        let strain_time = osu_curr_obj.delta_time.max(40.0);

        // Stamina lingers: decay noticeably slower than aim.
        let decay_rate = 0.995_f64.powf(1000.0 / strain_time.min(200.0));

        // Assume a comfortable flowing motion unless the spacing forces a
        // choice between snapping and flowing.
        let mut flow_prob = 1.0;

        if osu_curr_obj.jump_dist > Self::FLOW_DIST_THRESHOLD {
            let snap_value = 2.0
                * ((osu_curr_obj.strain_time - 50.0) / osu_curr_obj.strain_time)
                * ((osu_curr_obj.jump_dist - Self::FLOW_DIST_THRESHOLD).max(0.0)
                    / osu_curr_obj.jump_dist)
                * (50.0 + (osu_curr_obj.strain_time - 50.0) / osu_curr_obj.jump_dist);

            let angle = osu_curr_obj.angle.unwrap_or(0.0);

            let flow_value = osu_curr_obj.strain_time / osu_curr_obj.jump_dist
                * (1.0
                    - 0.75
                        * (FRAC_PI_2 * (osu_next_obj.jump_dist - 0.5).clamp(0.0, 1.0))
                            .sin()
                            .powi(2)
                        * ((PI - angle) / 2.0).sin().powi(2));

            let diff_value = snap_value - flow_value;

            flow_prob = 0.5 - 0.5 * erf(diff_value / (5.0 * SQRT_2));
        }

        if (osu_curr_obj.strain_time - osu_prev_obj.strain_time).abs() > Self::REPEAT_TOLERANCE {
            *repeat_strain_count = 0;
        } else {
            *repeat_strain_count += 1;
        }

        // Alternating parity gate: a trill splits the work between both
        // fingers, so only every other repeat awards strain.
        let strain = if *repeat_strain_count % 2 == 0 {
            (75.0 / strain_time).powf(2.5)
        } else {
            0.0
        };

        debug_assert!(!strain.is_nan());

        TapStaminaStrain {
            strain,
            decay_rate,
            flow_prob,
        }
    }
}

pub use self::{
    aim_snap::AimSnapEvaluator,
    tap_stamina::{TapStaminaEvaluator, TapStaminaStrain},
};

mod aim_snap;
mod tap_stamina;

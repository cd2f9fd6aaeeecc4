//! Per-object difficulty strain estimation for osu! under the snap/flow
//! movement model.
//!
//! Two skills are evaluated over a time-ordered object sequence:
//!
//! - **Aim (snap)**: the cost of precise cursor aiming, blending two
//!   competing movement hypotheses — a deliberate aim-and-stop ("snap")
//!   versus a continuous curve through the target ("flow") — via a Gaussian
//!   error function probability.
//! - **Tap (stamina)**: the cost of sustained tapping, gated by a
//!   repeat-pattern counter so rapid back-and-forth patterns are worth half
//!   of unidirectional streams.
//!
//! Input is a slice of [`HitObject`]s whose geometry has already been
//! produced by a map preprocessing stage; beatmap decoding, mods, and the
//! combination of skills into an overall star rating are not part of this
//! crate.
//!
//! ## Usage
//!
//! ```
//! use rosu_delta::{strains, HitObject, HitObjectKind, Pos};
//!
//! let objects: Vec<_> = (0..16)
//!     .map(|i| HitObject {
//!         pos: Pos::new(100.0 + 80.0 * (i % 2) as f32, 150.0),
//!         start_time: f64::from(i) * 120.0,
//!         kind: HitObjectKind::Circle,
//!     })
//!     .collect();
//!
//! let strains = strains(&objects, 4.0);
//!
//! // One entry per object past the first.
//! assert_eq!(strains.aim_snap.len(), objects.len() - 1);
//! ```

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::similar_names,
    clippy::unreadable_literal
)]

pub mod difficulty;
pub mod model;

mod strains;
mod util;

pub use self::{
    model::hit_object::{HitObject, HitObjectKind, Pos, Slider},
    strains::{strains, Strains},
};

//! varcond computes a displacement-conditioned variance texture descriptor.
//!
//! For a 2D intensity field and an offset `(dx, dy)`, the engine pairs every
//! pixel with its neighbor at that offset, groups neighbor intensities by the
//! center pixel's own value, and reduces the grouped distribution to the
//! population-level conditional variance `E[Var(neighbor | center)]` — a
//! scalar texture feature of the kind fed into Markov-Random-Field
//! segmentation.
//!
//! The computation is a single deterministic pass with no hidden state.
//! Optional row-parallel accumulation is available via the `rayon` feature
//! and grayscale image loading via `image-io`.

pub mod descriptor;
pub mod field;
pub mod hist;
mod reduce;
mod trace;
pub mod util;

pub use descriptor::{var_cond, var_cond_sweep};
pub use field::{Displacement, FieldView, OwnedField, Sample};
pub use hist::{accumulate, ConditionalGroup, ConditionalHistogram};
pub use util::{VarCondError, VarCondResult};

#[cfg(feature = "rayon")]
pub use descriptor::{var_cond_par, var_cond_sweep_par};

#[cfg(feature = "image-io")]
pub use field::io;

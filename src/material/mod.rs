//! Implements material models and the stress-update contract

mod constitutive;
mod elastic_trans_iso;
mod properties;
mod stress_strain;
pub use crate::material::constitutive::*;
pub use crate::material::elastic_trans_iso::*;
pub use crate::material::properties::*;
pub use crate::material::stress_strain::*;

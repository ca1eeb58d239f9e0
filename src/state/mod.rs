//! Implements the state containers attached to a material point

mod local_state;
mod local_state_mech;
mod local_state_thermo;
pub use crate::state::local_state::*;
pub use crate::state::local_state_mech::*;
pub use crate::state::local_state_thermo::*;

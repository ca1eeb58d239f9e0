//! Makes available common structures needed to drive a material point
//!
//! You may write `use matpoint::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::Config;
pub use crate::material::{ElasticTransIso, ParamElasticTransIso, StressStrainLaw, N_PROPS_ELASTIC_TRANS_ISO};
pub use crate::state::{LocalState, LocalStateMech, LocalStateThermoMech};
pub use crate::tensor::{rotate_strain, rotate_stress, Axis};
pub use crate::StrError;

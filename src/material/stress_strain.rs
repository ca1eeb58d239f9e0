use crate::state::LocalStateMech;
use crate::StrError;

/// Defines the contract of an incremental stress-update ("user material") routine
///
/// The external driver fills `state.base.strain`, `state.base.strain_delta`,
/// `state.base.temperature` and `state.base.temperature_delta`, then calls
/// [StressStrainLaw::update_stress]. The law must leave the container in a
/// consistent condition: new stress, both tangent operators, and the work
/// accumulators advanced by the increment. The driver alone decides whether
/// to commit (`set_start`) or revert (`to_start`) afterwards.
///
/// `first_call` indicates the very first increment of a fresh simulation;
/// laws use it to initialize stress and internal values.
pub trait StressStrainLaw {
    /// Returns the number of internal values required by this law
    fn n_internal_values(&self) -> usize;

    /// Updates stress, tangent operators, and work accumulators in place
    fn update_stress(&self, state: &mut LocalStateMech, first_call: bool) -> Result<(), StrError>;
}

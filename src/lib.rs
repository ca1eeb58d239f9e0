//! Matpoint - constitutive state engine for material points
//!
//! This crate tracks the evolving mechanical state (strain, stress, internal
//! variables, tangent operators) of a single material point across an
//! incremental simulation driven by an external nonlinear solver. It provides:
//!
//! * Rotation primitives for Voigt-packed tensors ([crate::tensor])
//! * State containers with a start-of-step / current two-phase commit model
//!   ([crate::state])
//! * Stress-update ("user material") routines following a common contract
//!   ([crate::material])
//!
//! The external driver owns the iteration loop: it fills the strain increment,
//! calls a stress-update routine, checks convergence, then either commits the
//! step ([crate::state::LocalState::set_start]) or reverts the trial
//! ([crate::state::LocalState::to_start]).

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
pub mod state;
pub mod tensor;

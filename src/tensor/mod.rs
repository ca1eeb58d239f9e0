//! Implements rotation primitives for Voigt-packed tensors

mod axis;
mod rotation;
pub use crate::tensor::axis::*;
pub use crate::tensor::rotation::*;

//! Implements the base structures shared by all constitutive laws

mod config;
pub use crate::base::config::*;

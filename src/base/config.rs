use crate::StrError;

/// Holds configuration constants shared by rotations and constitutive laws
///
/// These values used to be process-wide constants in older material codes;
/// here they travel explicitly with the call so that two simulations with
/// different settings can coexist.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Tolerance below which a rotation angle is treated as exactly zero (rad)
    pub iota: f64,

    /// Reference temperature for thermal eigenstrain computations
    pub temp_ref: f64,
}

impl Config {
    /// Allocates a new instance with default constants
    pub fn new() -> Self {
        Config {
            iota: 1e-9,
            temp_ref: 293.15,
        }
    }

    /// Sets the near-zero rotation angle tolerance (rad)
    pub fn set_iota(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value < 0.0 {
            return Err("iota tolerance must be ≥ 0.0");
        }
        self.iota = value;
        Ok(self)
    }

    /// Sets the reference temperature
    pub fn set_temp_ref(&mut self, value: f64) -> Result<&mut Self, StrError> {
        self.temp_ref = value;
        Ok(self)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

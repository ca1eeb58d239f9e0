use crate::base::Config;
use crate::tensor::{rotate_def_grad, rotate_strain, rotate_stress, Axis, AXIS_PHI, AXIS_PSI, AXIS_THETA};
use crate::StrError;
use russell_lab::{mat_copy, vec_copy, Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the basic state of a material point in a given coordinate frame
///
/// The container follows a two-phase model used by iterative solvers: the
/// `*_start` fields freeze the last accepted configuration while the plain
/// fields hold the in-progress trial. [LocalState::set_start] commits a step
/// and [LocalState::to_start] rejects a trial.
///
/// Tensors are Voigt-packed 6-vectors in the order (11, 22, 33, 12, 13, 23)
/// with engineering shear for strains; deformation gradients are 3×3.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalState {
    /// Total strain ε
    pub strain: Vector,

    /// Strain increment Δε over the active step
    pub strain_delta: Vector,

    /// Current (trial) stress σ
    pub stress: Vector,

    /// Stress frozen at the last committed step boundary
    pub stress_start: Vector,

    /// Deformation gradient at the start of the step
    pub def_grad_start: Matrix,

    /// Deformation gradient at the end of the step
    pub def_grad_end: Matrix,

    /// Temperature
    pub temperature: f64,

    /// Temperature increment over the active step
    pub temperature_delta: f64,

    /// Law-specific internal values (current)
    pub internal_values: Vector,

    /// Law-specific internal values at the last committed step boundary
    pub internal_values_start: Vector,
}

impl LocalState {
    /// Allocates a new zero-initialized instance
    ///
    /// `n_internal_values` fixes the internal-value length for the life of
    /// the container; it cannot be changed afterwards.
    pub fn new(n_internal_values: usize) -> Self {
        LocalState {
            strain: Vector::new(6),
            strain_delta: Vector::new(6),
            stress: Vector::new(6),
            stress_start: Vector::new(6),
            def_grad_start: Matrix::new(3, 3),
            def_grad_end: Matrix::new(3, 3),
            temperature: 0.0,
            temperature_delta: 0.0,
            internal_values: Vector::new(n_internal_values),
            internal_values_start: Vector::new(n_internal_values),
        }
    }

    /// Returns the fixed number of internal values
    pub fn n_internal_values(&self) -> usize {
        self.internal_values.dim()
    }

    /// Bulk-replaces every field, checking all dimensions first
    ///
    /// This is the single validation chokepoint: every shape invariant
    /// (6, 6×6, 3×3, declared internal length) is enforced here, and no
    /// field is written unless all inputs pass (all-or-nothing).
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        strain: &Vector,
        strain_delta: &Vector,
        stress: &Vector,
        stress_start: &Vector,
        def_grad_start: &Matrix,
        def_grad_end: &Matrix,
        temperature: f64,
        temperature_delta: f64,
        internal_values: &Vector,
        internal_values_start: &Vector,
    ) -> Result<(), StrError> {
        self.check_base_dims(
            strain,
            strain_delta,
            stress,
            stress_start,
            def_grad_start,
            def_grad_end,
            internal_values,
            internal_values_start,
        )?;
        vec_copy(&mut self.strain, strain).unwrap();
        vec_copy(&mut self.strain_delta, strain_delta).unwrap();
        vec_copy(&mut self.stress, stress).unwrap();
        vec_copy(&mut self.stress_start, stress_start).unwrap();
        mat_copy(&mut self.def_grad_start, def_grad_start).unwrap();
        mat_copy(&mut self.def_grad_end, def_grad_end).unwrap();
        self.temperature = temperature;
        self.temperature_delta = temperature_delta;
        vec_copy(&mut self.internal_values, internal_values).unwrap();
        vec_copy(&mut self.internal_values_start, internal_values_start).unwrap();
        Ok(())
    }

    /// Restores the current values from the start-of-step values
    ///
    /// Reverts a rejected trial: stress and internal values go back to the
    /// last committed configuration. Strain and its increment are NOT
    /// touched; the driver re-applies a new trial increment.
    pub fn to_start(&mut self) {
        vec_copy(&mut self.stress, &self.stress_start).unwrap();
        vec_copy(&mut self.internal_values, &self.internal_values_start).unwrap();
    }

    /// Freezes the current values as the new start-of-step values
    ///
    /// Commits an accepted step; also advances the start deformation
    /// gradient to the end-of-step one.
    pub fn set_start(&mut self) {
        vec_copy(&mut self.stress_start, &self.stress).unwrap();
        vec_copy(&mut self.internal_values_start, &self.internal_values).unwrap();
        mat_copy(&mut self.def_grad_start, &self.def_grad_end).unwrap();
    }

    /// Returns a copy of this state re-expressed in the global frame
    ///
    /// The local frame is related to the global one by the 3-1-3 Euler
    /// sequence (psi about Z, theta about the rotated X, phi about the
    /// twice-rotated Z). The local→global change applies the three inverse
    /// single-axis rotations in the order (−phi, −theta, −psi); each one is
    /// skipped when its angle magnitude is below `config.iota`.
    pub fn rotate_l2g(&self, config: &Config, psi: f64, theta: f64, phi: f64) -> Result<Self, StrError> {
        let mut res = self.clone();
        for (angle, axis) in [(-phi, AXIS_PHI), (-theta, AXIS_THETA), (-psi, AXIS_PSI)] {
            res.rotate_one_axis(config, angle, axis)?;
        }
        Ok(res)
    }

    /// Returns a copy of this state re-expressed in the local frame
    ///
    /// Exact inverse of [LocalState::rotate_l2g]: applies the single-axis
    /// rotations in the order (+psi, +theta, +phi).
    pub fn rotate_g2l(&self, config: &Config, psi: f64, theta: f64, phi: f64) -> Result<Self, StrError> {
        let mut res = self.clone();
        for (angle, axis) in [(psi, AXIS_PSI), (theta, AXIS_THETA), (phi, AXIS_PHI)] {
            res.rotate_one_axis(config, angle, axis)?;
        }
        Ok(res)
    }

    /// Applies one single-axis rotation to every tensor-valued field
    pub(crate) fn rotate_one_axis(&mut self, config: &Config, angle: f64, axis: Axis) -> Result<(), StrError> {
        if f64::abs(angle) <= config.iota {
            return Ok(());
        }
        self.strain = rotate_strain(&self.strain, angle, axis)?;
        self.strain_delta = rotate_strain(&self.strain_delta, angle, axis)?;
        self.stress = rotate_stress(&self.stress, angle, axis)?;
        self.stress_start = rotate_stress(&self.stress_start, angle, axis)?;
        self.def_grad_start = rotate_def_grad(&self.def_grad_start, angle, axis)?;
        self.def_grad_end = rotate_def_grad(&self.def_grad_end, angle, axis)?;
        Ok(())
    }

    /// Checks the dimensions of candidate field values
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn check_base_dims(
        &self,
        strain: &Vector,
        strain_delta: &Vector,
        stress: &Vector,
        stress_start: &Vector,
        def_grad_start: &Matrix,
        def_grad_end: &Matrix,
        internal_values: &Vector,
        internal_values_start: &Vector,
    ) -> Result<(), StrError> {
        if strain.dim() != 6 {
            return Err("strain vector must have dimension 6");
        }
        if strain_delta.dim() != 6 {
            return Err("strain increment vector must have dimension 6");
        }
        if stress.dim() != 6 {
            return Err("stress vector must have dimension 6");
        }
        if stress_start.dim() != 6 {
            return Err("start-of-step stress vector must have dimension 6");
        }
        if def_grad_start.dims() != (3, 3) {
            return Err("start deformation gradient must have dimensions 3×3");
        }
        if def_grad_end.dims() != (3, 3) {
            return Err("end deformation gradient must have dimensions 3×3");
        }
        let nivs = self.internal_values.dim();
        if internal_values.dim() != nivs {
            return Err("internal values vector does not match the declared length");
        }
        if internal_values_start.dim() != nivs {
            return Err("start-of-step internal values vector does not match the declared length");
        }
        Ok(())
    }
}

impl fmt::Display for LocalState {
    /// Writes a human-readable dump listing every field by name
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "strain =\n{}", self.strain)?;
        writeln!(f, "strain_delta =\n{}", self.strain_delta)?;
        writeln!(f, "stress =\n{}", self.stress)?;
        writeln!(f, "stress_start =\n{}", self.stress_start)?;
        writeln!(f, "def_grad_start =\n{}", self.def_grad_start)?;
        writeln!(f, "def_grad_end =\n{}", self.def_grad_end)?;
        writeln!(f, "temperature = {}", self.temperature)?;
        writeln!(f, "temperature_delta = {}", self.temperature_delta)?;
        writeln!(f, "n_internal_values = {}", self.n_internal_values())?;
        if self.n_internal_values() > 0 {
            writeln!(f, "internal_values =\n{}", self.internal_values)?;
            writeln!(f, "internal_values_start =\n{}", self.internal_values_start)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

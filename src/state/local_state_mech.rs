use super::LocalState;
use crate::base::Config;
use crate::tensor::{rotate_stiffness, rotate_stress, Axis, AXIS_PHI, AXIS_PSI, AXIS_THETA};
use crate::StrError;
use russell_lab::{mat_copy, vec_copy, Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of the total work component in the mechanical work vector
pub const WORK_TOTAL: usize = 0;

/// Index of the recoverable (stored) work component
pub const WORK_RECOVERABLE: usize = 1;

/// Index of the irrecoverable work component
pub const WORK_IRRECOVERABLE: usize = 2;

/// Index of the dissipated work component
pub const WORK_DISSIPATED: usize = 3;

/// Holds the mechanical state of a material point
///
/// Extends [LocalState] (by composition) with the inelastic stress
/// contribution, the mechanical work partition, and the elastic/consistent
/// tangent operators used by the external nonlinear solver.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalStateMech {
    /// Basic state shared by all constitutive laws
    pub base: LocalState,

    /// Inelastic stress contribution (current)
    pub stress_inelastic: Vector,

    /// Inelastic stress contribution at the last committed step boundary
    pub stress_inelastic_start: Vector,

    /// Mechanical work partition: (total, recoverable, irrecoverable, dissipated)
    pub work_mech: Vector,

    /// Mechanical work partition at the last committed step boundary
    pub work_mech_start: Vector,

    /// Elastic stiffness operator L (6×6)
    pub stiffness: Matrix,

    /// Consistent tangent operator Lt (6×6)
    pub stiffness_tangent: Matrix,
}

impl LocalStateMech {
    /// Allocates a new zero-initialized instance
    pub fn new(n_internal_values: usize) -> Self {
        LocalStateMech {
            base: LocalState::new(n_internal_values),
            stress_inelastic: Vector::new(6),
            stress_inelastic_start: Vector::new(6),
            work_mech: Vector::new(4),
            work_mech_start: Vector::new(4),
            stiffness: Matrix::new(6, 6),
            stiffness_tangent: Matrix::new(6, 6),
        }
    }

    /// Returns the fixed number of internal values
    pub fn n_internal_values(&self) -> usize {
        self.base.n_internal_values()
    }

    /// Bulk-replaces every field, checking all dimensions first (all-or-nothing)
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
        stress_inelastic: &Vector,
        stress_inelastic_start: &Vector,
        work_mech: &Vector,
        work_mech_start: &Vector,
        stiffness: &Matrix,
        stiffness_tangent: &Matrix,
    ) -> Result<(), StrError> {
        self.base.check_base_dims(
            strain,
            strain_delta,
            stress,
            stress_start,
            def_grad_start,
            def_grad_end,
            internal_values,
            internal_values_start,
        )?;
        if stress_inelastic.dim() != 6 {
            return Err("inelastic stress vector must have dimension 6");
        }
        if stress_inelastic_start.dim() != 6 {
            return Err("start-of-step inelastic stress vector must have dimension 6");
        }
        if work_mech.dim() != 4 {
            return Err("mechanical work vector must have dimension 4");
        }
        if work_mech_start.dim() != 4 {
            return Err("start-of-step mechanical work vector must have dimension 4");
        }
        if stiffness.dims() != (6, 6) {
            return Err("stiffness matrix must have dimensions 6×6");
        }
        if stiffness_tangent.dims() != (6, 6) {
            return Err("tangent stiffness matrix must have dimensions 6×6");
        }
        self.base
            .update(
                strain,
                strain_delta,
                stress,
                stress_start,
                def_grad_start,
                def_grad_end,
                temperature,
                temperature_delta,
                internal_values,
                internal_values_start,
            )
            .unwrap(); // already validated
        vec_copy(&mut self.stress_inelastic, stress_inelastic).unwrap();
        vec_copy(&mut self.stress_inelastic_start, stress_inelastic_start).unwrap();
        vec_copy(&mut self.work_mech, work_mech).unwrap();
        vec_copy(&mut self.work_mech_start, work_mech_start).unwrap();
        mat_copy(&mut self.stiffness, stiffness).unwrap();
        mat_copy(&mut self.stiffness_tangent, stiffness_tangent).unwrap();
        Ok(())
    }

    /// Restores the current values from the start-of-step values
    pub fn to_start(&mut self) {
        self.base.to_start();
        vec_copy(&mut self.stress_inelastic, &self.stress_inelastic_start).unwrap();
        vec_copy(&mut self.work_mech, &self.work_mech_start).unwrap();
    }

    /// Freezes the current values as the new start-of-step values
    pub fn set_start(&mut self) {
        self.base.set_start();
        vec_copy(&mut self.stress_inelastic_start, &self.stress_inelastic).unwrap();
        vec_copy(&mut self.work_mech_start, &self.work_mech).unwrap();
    }

    /// Returns a copy of this state re-expressed in the global frame
    ///
    /// Same sequencing as [LocalState::rotate_l2g]; inelastic stresses
    /// rotate as stress-like objects and both 6×6 operators as
    /// stiffness-like objects. Work accumulators are frame-invariant.
    pub fn rotate_l2g(&self, config: &Config, psi: f64, theta: f64, phi: f64) -> Result<Self, StrError> {
        let mut res = self.clone();
        for (angle, axis) in [(-phi, AXIS_PHI), (-theta, AXIS_THETA), (-psi, AXIS_PSI)] {
            res.rotate_one_axis(config, angle, axis)?;
        }
        Ok(res)
    }

    /// Returns a copy of this state re-expressed in the local frame
    pub fn rotate_g2l(&self, config: &Config, psi: f64, theta: f64, phi: f64) -> Result<Self, StrError> {
        let mut res = self.clone();
        for (angle, axis) in [(psi, AXIS_PSI), (theta, AXIS_THETA), (phi, AXIS_PHI)] {
            res.rotate_one_axis(config, angle, axis)?;
        }
        Ok(res)
    }

    /// Applies one single-axis rotation to every tensor-valued field
    fn rotate_one_axis(&mut self, config: &Config, angle: f64, axis: Axis) -> Result<(), StrError> {
        if f64::abs(angle) <= config.iota {
            return Ok(());
        }
        self.base.rotate_one_axis(config, angle, axis)?;
        self.stress_inelastic = rotate_stress(&self.stress_inelastic, angle, axis)?;
        self.stress_inelastic_start = rotate_stress(&self.stress_inelastic_start, angle, axis)?;
        self.stiffness = rotate_stiffness(&self.stiffness, angle, axis)?;
        self.stiffness_tangent = rotate_stiffness(&self.stiffness_tangent, angle, axis)?;
        Ok(())
    }
}

impl fmt::Display for LocalStateMech {
    /// Writes a human-readable dump listing every field by name
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.base)?;
        writeln!(f, "stress_inelastic =\n{}", self.stress_inelastic)?;
        writeln!(f, "stress_inelastic_start =\n{}", self.stress_inelastic_start)?;
        writeln!(f, "work_mech =\n{}", self.work_mech)?;
        writeln!(f, "work_mech_start =\n{}", self.work_mech_start)?;
        writeln!(f, "stiffness =\n{}", self.stiffness)?;
        writeln!(f, "stiffness_tangent =\n{}", self.stiffness_tangent)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

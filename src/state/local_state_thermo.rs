use super::LocalState;
use crate::base::Config;
use crate::tensor::{rotate_stiffness, rotate_strain, rotate_stress, Axis, AXIS_PHI, AXIS_PSI, AXIS_THETA};
use crate::StrError;
use russell_lab::{mat_copy, vec_copy, Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the thermomechanical state of a material point
///
/// Extends [LocalState] (by composition) with an entropy-like scalar, a
/// residual scalar, the mechanical and thermal work partitions, and the
/// cross-coupled Jacobians needed by a coupled thermomechanical solver.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalStateThermoMech {
    /// Basic state shared by all constitutive laws
    pub base: LocalState,

    /// Entropy-like quantity Q
    pub heat_q: f64,

    /// Residual scalar r of the coupled heat equation
    pub residual_r: f64,

    /// Mechanical work partition: (total, recoverable, irrecoverable, dissipated)
    pub work_mech: Vector,

    /// Mechanical work partition at the last committed step boundary
    pub work_mech_start: Vector,

    /// Thermal work components (length 3)
    pub work_thermal: Vector,

    /// Thermal work components at the last committed step boundary
    pub work_thermal_start: Vector,

    /// Stress-strain Jacobian ∂σ/∂ε (6×6)
    pub dsde: Matrix,

    /// Tangent stress-strain Jacobian ∂σ/∂ε used by the iterative scheme (6×6)
    pub dsdet: Matrix,

    /// Stress-temperature Jacobian ∂σ/∂T (length 6, stress-like)
    pub dsdt: Vector,

    /// Residual-strain Jacobian ∂r/∂ε (length 6, strain-like)
    pub drde: Vector,

    /// Residual-temperature Jacobian ∂r/∂T
    pub drdt: f64,
}

impl LocalStateThermoMech {
    /// Allocates a new zero-initialized instance
    pub fn new(n_internal_values: usize) -> Self {
        LocalStateThermoMech {
            base: LocalState::new(n_internal_values),
            heat_q: 0.0,
            residual_r: 0.0,
            work_mech: Vector::new(4),
            work_mech_start: Vector::new(4),
            work_thermal: Vector::new(3),
            work_thermal_start: Vector::new(3),
            dsde: Matrix::new(6, 6),
            dsdet: Matrix::new(6, 6),
            dsdt: Vector::new(6),
            drde: Vector::new(6),
            drdt: 0.0,
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
        heat_q: f64,
        residual_r: f64,
        work_mech: &Vector,
        work_mech_start: &Vector,
        work_thermal: &Vector,
        work_thermal_start: &Vector,
        dsde: &Matrix,
        dsdet: &Matrix,
        dsdt: &Vector,
        drde: &Vector,
        drdt: f64,
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
        if work_mech.dim() != 4 {
            return Err("mechanical work vector must have dimension 4");
        }
        if work_mech_start.dim() != 4 {
            return Err("start-of-step mechanical work vector must have dimension 4");
        }
        if work_thermal.dim() != 3 {
            return Err("thermal work vector must have dimension 3");
        }
        if work_thermal_start.dim() != 3 {
            return Err("start-of-step thermal work vector must have dimension 3");
        }
        if dsde.dims() != (6, 6) {
            return Err("stress-strain Jacobian must have dimensions 6×6");
        }
        if dsdet.dims() != (6, 6) {
            return Err("tangent stress-strain Jacobian must have dimensions 6×6");
        }
        if dsdt.dim() != 6 {
            return Err("stress-temperature Jacobian must have dimension 6");
        }
        if drde.dim() != 6 {
            return Err("residual-strain Jacobian must have dimension 6");
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
        self.heat_q = heat_q;
        self.residual_r = residual_r;
        vec_copy(&mut self.work_mech, work_mech).unwrap();
        vec_copy(&mut self.work_mech_start, work_mech_start).unwrap();
        vec_copy(&mut self.work_thermal, work_thermal).unwrap();
        vec_copy(&mut self.work_thermal_start, work_thermal_start).unwrap();
        mat_copy(&mut self.dsde, dsde).unwrap();
        mat_copy(&mut self.dsdet, dsdet).unwrap();
        vec_copy(&mut self.dsdt, dsdt).unwrap();
        vec_copy(&mut self.drde, drde).unwrap();
        self.drdt = drdt;
        Ok(())
    }

    /// Restores the current values from the start-of-step values
    pub fn to_start(&mut self) {
        self.base.to_start();
        vec_copy(&mut self.work_mech, &self.work_mech_start).unwrap();
        vec_copy(&mut self.work_thermal, &self.work_thermal_start).unwrap();
    }

    /// Freezes the current values as the new start-of-step values
    pub fn set_start(&mut self) {
        self.base.set_start();
        vec_copy(&mut self.work_mech_start, &self.work_mech).unwrap();
        vec_copy(&mut self.work_thermal_start, &self.work_thermal).unwrap();
    }

    /// Returns a copy of this state re-expressed in the global frame
    ///
    /// Same sequencing as [LocalState::rotate_l2g]. The Jacobians rotate
    /// according to their character: ∂σ/∂ε as stiffness-like, ∂σ/∂T as
    /// stress-like, ∂r/∂ε as strain-like. Q, r and the work accumulators
    /// are frame-invariant.
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
        self.dsde = rotate_stiffness(&self.dsde, angle, axis)?;
        self.dsdet = rotate_stiffness(&self.dsdet, angle, axis)?;
        self.dsdt = rotate_stress(&self.dsdt, angle, axis)?;
        self.drde = rotate_strain(&self.drde, angle, axis)?;
        Ok(())
    }
}

impl fmt::Display for LocalStateThermoMech {
    /// Writes a human-readable dump listing every field by name
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.base)?;
        writeln!(f, "heat_q = {}", self.heat_q)?;
        writeln!(f, "residual_r = {}", self.residual_r)?;
        writeln!(f, "work_mech =\n{}", self.work_mech)?;
        writeln!(f, "work_mech_start =\n{}", self.work_mech_start)?;
        writeln!(f, "work_thermal =\n{}", self.work_thermal)?;
        writeln!(f, "work_thermal_start =\n{}", self.work_thermal_start)?;
        writeln!(f, "dsde =\n{}", self.dsde)?;
        writeln!(f, "dsdet =\n{}", self.dsdet)?;
        writeln!(f, "dsdt =\n{}", self.dsdt)?;
        writeln!(f, "drde =\n{}", self.drde)?;
        writeln!(f, "drdt = {}", self.drdt)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LocalStateThermoMech;
    use crate::base::Config;
    use russell_lab::{mat_approx_eq, vec_approx_eq, Matrix, Vector};

    fn sample_state() -> LocalStateThermoMech {
        let mut state = LocalStateThermoMech::new(1);
        state
            .update(
                &Vector::from(&[1e-3, -1e-3, 0.0, 2e-3, 0.0, 0.0]),
                &Vector::from(&[1e-5, 0.0, 0.0, 0.0, 0.0, 0.0]),
                &Vector::from(&[120.0, -20.0, 0.0, 15.0, 0.0, 0.0]),
                &Vector::from(&[110.0, -18.0, 0.0, 14.0, 0.0, 0.0]),
                &Matrix::diagonal(&[1.0, 1.0, 1.0]),
                &Matrix::diagonal(&[1.0, 1.0, 1.0]),
                310.0,
                2.0,
                &Vector::from(&[0.5]),
                &Vector::from(&[0.4]),
                3.3,
                -0.7,
                &Vector::from(&[6.0, 5.0, 0.5, 0.5]),
                &Vector::from(&[5.0, 4.5, 0.3, 0.2]),
                &Vector::from(&[1.0, 2.0, 3.0]),
                &Vector::from(&[0.9, 1.8, 2.7]),
                &Matrix::diagonal(&[1.0, 1.0, 1.0, 0.5, 0.5, 0.5]),
                &Matrix::diagonal(&[1.0, 1.0, 1.0, 0.5, 0.5, 0.5]),
                &Vector::from(&[-1.0, -1.0, -1.0, 0.0, 0.0, 0.0]),
                &Vector::from(&[2.0, 2.0, 2.0, 0.0, 0.0, 0.0]),
                4.0,
            )
            .unwrap();
        state
    }

    #[test]
    fn new_works() {
        let state = LocalStateThermoMech::new(2);
        assert_eq!(state.n_internal_values(), 2);
        assert_eq!(state.work_thermal.dim(), 3);
        assert_eq!(state.dsde.dims(), (6, 6));
        assert_eq!(state.dsdt.dim(), 6);
        assert_eq!(state.drdt, 0.0);
    }

    #[test]
    fn update_captures_dimension_errors_without_partial_mutation() {
        let mut state = LocalStateThermoMech::new(0);
        let good6 = Vector::new(6);
        let good33 = Matrix::new(3, 3);
        let good66 = Matrix::new(6, 6);
        let res = state.update(
            &good6,
            &good6,
            &good6,
            &good6,
            &good33,
            &good33,
            10.0,
            0.0,
            &Vector::new(0),
            &Vector::new(0),
            0.0,
            0.0,
            &Vector::new(4),
            &Vector::new(4),
            &Vector::new(2), // wrong: must be 3
            &Vector::new(3),
            &good66,
            &good66,
            &good6,
            &good6,
            0.0,
        );
        assert_eq!(res.err(), Some("thermal work vector must have dimension 3"));
        assert_eq!(state.base.temperature, 0.0);

        let res = state.update(
            &good6,
            &good6,
            &good6,
            &good6,
            &good33,
            &good33,
            10.0,
            0.0,
            &Vector::new(0),
            &Vector::new(0),
            0.0,
            0.0,
            &Vector::new(4),
            &Vector::new(4),
            &Vector::new(3),
            &Vector::new(3),
            &good66,
            &good66,
            &Vector::new(5), // wrong: must be 6
            &good6,
            0.0,
        );
        assert_eq!(res.err(), Some("stress-temperature Jacobian must have dimension 6"));
        assert_eq!(state.base.temperature, 0.0);
    }

    #[test]
    fn commit_and_revert_synchronize_extension_fields() {
        let mut state = sample_state();
        state.to_start();
        vec_approx_eq(&state.work_mech, &[5.0, 4.5, 0.3, 0.2], 1e-15);
        vec_approx_eq(&state.work_thermal, &[0.9, 1.8, 2.7], 1e-15);
        vec_approx_eq(&state.base.stress, &[110.0, -18.0, 0.0, 14.0, 0.0, 0.0], 1e-15);

        let mut state = sample_state();
        state.set_start();
        vec_approx_eq(&state.work_mech_start, &[6.0, 5.0, 0.5, 0.5], 1e-15);
        vec_approx_eq(&state.work_thermal_start, &[1.0, 2.0, 3.0], 1e-15);
    }

    #[test]
    fn rotations_are_inverse_of_each_other() {
        let config = Config::new();
        let state = sample_state();
        let (psi, theta, phi) = (-0.5, 0.9, 0.2);
        let local = state.rotate_g2l(&config, psi, theta, phi).unwrap();
        let back = local.rotate_l2g(&config, psi, theta, phi).unwrap();
        vec_approx_eq(&back.base.stress, &state.base.stress, 1e-12);
        mat_approx_eq(&back.dsde, &state.dsde, 1e-13);
        mat_approx_eq(&back.dsdet, &state.dsdet, 1e-13);
        vec_approx_eq(&back.dsdt, &state.dsdt, 1e-13);
        vec_approx_eq(&back.drde, &state.drde, 1e-13);
    }

    #[test]
    fn rotation_keeps_scalars_and_work_accumulators() {
        let config = Config::new();
        let state = sample_state();
        let res = state.rotate_l2g(&config, 0.8, 0.1, -0.4).unwrap();
        assert_eq!(res.heat_q, 3.3);
        assert_eq!(res.residual_r, -0.7);
        assert_eq!(res.drdt, 4.0);
        vec_approx_eq(&res.work_mech, &[6.0, 5.0, 0.5, 0.5], 1e-15);
        vec_approx_eq(&res.work_thermal, &[1.0, 2.0, 3.0], 1e-15);
    }

    #[test]
    fn display_works() {
        let text = format!("{}", sample_state());
        assert!(text.contains("heat_q = 3.3"));
        assert!(text.contains("residual_r = -0.7"));
        assert!(text.contains("work_thermal ="));
        assert!(text.contains("drdt = 4"));
    }
}

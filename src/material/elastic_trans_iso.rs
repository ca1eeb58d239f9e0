use super::{elastic_prediction, stiffness_trans_iso, thermal_expansion_trans_iso};
use super::{ParamElasticTransIso, StressStrainLaw};
use crate::base::Config;
use crate::state::{LocalStateMech, WORK_RECOVERABLE, WORK_TOTAL};
use crate::StrError;
use russell_lab::{mat_copy, vec_add, vec_copy, vec_inner, Matrix, Vector};

/// Implements the transversely isotropic thermoelastic law
///
/// This is the canonical template for stress-update routines: an elastic
/// prediction with thermal eigenstrain, a closed-form stiffness written to
/// both tangent slots (no path dependence), and trapezoidal work
/// accumulation. The law keeps no internal values.
pub struct ElasticTransIso {
    /// Material constants by name
    pub param: ParamElasticTransIso,

    /// Reference temperature for the thermal eigenstrain
    temp_ref: f64,

    /// Precomputed stiffness operator (strain-independent)
    stiffness: Matrix,

    /// Precomputed thermal expansion tensor in Voigt form
    alpha: Vector,
}

impl ElasticTransIso {
    /// Allocates a new instance from named constants
    pub fn new(config: &Config, param: &ParamElasticTransIso) -> Result<Self, StrError> {
        let stiffness = stiffness_trans_iso(param)?;
        let alpha = thermal_expansion_trans_iso(param);
        Ok(ElasticTransIso {
            param: *param,
            temp_ref: config.temp_ref,
            stiffness,
            alpha,
        })
    }

    /// Allocates a new instance from the positional 8-constant property vector
    pub fn from_props(config: &Config, props: &Vector) -> Result<Self, StrError> {
        let param = ParamElasticTransIso::from_props(props)?;
        ElasticTransIso::new(config, &param)
    }

    /// Returns an access to the precomputed stiffness operator
    pub fn get_stiffness(&self) -> &Matrix {
        &self.stiffness
    }
}

impl StressStrainLaw for ElasticTransIso {
    /// Returns zero; the elastic law keeps no history variables
    fn n_internal_values(&self) -> usize {
        0
    }

    /// Performs the elastic prediction with thermal eigenstrain
    ///
    /// 1. Writes the closed-form stiffness to both tangent slots
    /// 2. On `first_call`, resets stress to zero (fresh simulation)
    /// 3. Forms the elastic strain `ε + Δε − α (T + ΔT − temp_ref)`
    /// 4. Computes the new stress σ = L · ε_el
    /// 5. Accumulates total and recoverable work by the trapezoidal rule
    ///    `0.5 (σ_start + σ) : Δε`; nothing is dissipated
    fn update_stress(&self, state: &mut LocalStateMech, first_call: bool) -> Result<(), StrError> {
        mat_copy(&mut state.stiffness, &self.stiffness)?;
        mat_copy(&mut state.stiffness_tangent, &self.stiffness)?;

        if first_call {
            state.base.stress.fill(0.0);
        }
        let stress_before = state.base.stress.clone();

        let mut strain_elastic = Vector::new(6);
        vec_add(&mut strain_elastic, 1.0, &state.base.strain, 1.0, &state.base.strain_delta)?;
        let theta = state.base.temperature + state.base.temperature_delta - self.temp_ref;
        for i in 0..6 {
            strain_elastic[i] -= self.alpha[i] * theta;
        }

        let stress = elastic_prediction(&self.stiffness, &strain_elastic)?;
        vec_copy(&mut state.base.stress, &stress)?;

        let mut stress_sum = Vector::new(6);
        vec_add(&mut stress_sum, 1.0, &stress_before, 1.0, &state.base.stress)?;
        let work_delta = 0.5 * vec_inner(&stress_sum, &state.base.strain_delta);
        state.work_mech[WORK_TOTAL] += work_delta;
        state.work_mech[WORK_RECOVERABLE] += work_delta;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

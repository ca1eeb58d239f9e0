use super::ParamElasticTransIso;
use crate::StrError;
use russell_lab::{mat_inverse, mat_vec_mul, Matrix, Vector};

/// Returns the second-order identity tensor in Voigt form: (1, 1, 1, 0, 0, 0)
pub fn voigt_identity() -> Vector {
    Vector::from(&[1.0, 1.0, 1.0, 0.0, 0.0, 0.0])
}

/// Computes the closed-form transversely isotropic stiffness operator (6×6)
///
/// Builds the compliance from the five independent constants with the
/// longitudinal direction given by `param.axis` and inverts it. Voigt shear
/// components involving the longitudinal axis take G_LT; the remaining
/// transverse-transverse shear takes E_T / (2 (1 + ν_TT)).
pub fn stiffness_trans_iso(param: &ParamElasticTransIso) -> Result<Matrix, StrError> {
    if param.young_l <= 0.0 || param.young_t <= 0.0 || param.shear_lt <= 0.0 {
        return Err("elastic moduli must be positive");
    }
    // longitudinal normal index and the two transverse ones
    let (il, it1, it2) = match param.axis {
        1 => (0, 1, 2),
        2 => (1, 0, 2),
        3 => (2, 0, 1),
        _ => return Err("material axis must be 1, 2, or 3"),
    };
    // Voigt shear index of the (it1, it2) pair: 12 → 3, 13 → 4, 23 → 5
    let shear_tt = it1 + it2 + 2;

    let mut compliance = Matrix::new(6, 6);
    compliance.set(il, il, 1.0 / param.young_l);
    compliance.set(it1, it1, 1.0 / param.young_t);
    compliance.set(it2, it2, 1.0 / param.young_t);
    compliance.set(il, it1, -param.poisson_lt / param.young_l);
    compliance.set(it1, il, -param.poisson_lt / param.young_l);
    compliance.set(il, it2, -param.poisson_lt / param.young_l);
    compliance.set(it2, il, -param.poisson_lt / param.young_l);
    compliance.set(it1, it2, -param.poisson_tt / param.young_t);
    compliance.set(it2, it1, -param.poisson_tt / param.young_t);
    for k in 3..6 {
        if k == shear_tt {
            compliance.set(k, k, 2.0 * (1.0 + param.poisson_tt) / param.young_t);
        } else {
            compliance.set(k, k, 1.0 / param.shear_lt);
        }
    }

    let mut stiffness = Matrix::new(6, 6);
    mat_inverse(&mut stiffness, &compliance)?;
    Ok(stiffness)
}

/// Computes the thermal expansion tensor in Voigt form
///
/// α = α_T · I with α_L − α_T added on the longitudinal normal component.
pub fn thermal_expansion_trans_iso(param: &ParamElasticTransIso) -> Vector {
    let mut alpha = voigt_identity();
    for i in 0..3 {
        alpha[i] *= param.alpha_t;
    }
    alpha[param.axis - 1] += param.alpha_l - param.alpha_t;
    alpha
}

/// Computes the elastic stress prediction σ = L · ε
pub fn elastic_prediction(stiffness: &Matrix, strain_elastic: &Vector) -> Result<Vector, StrError> {
    if stiffness.dims() != (6, 6) {
        return Err("stiffness-like matrix must have dimensions 6×6");
    }
    if strain_elastic.dim() != 6 {
        return Err("strain-like vector must have dimension 6");
    }
    let mut sigma = Vector::new(6);
    mat_vec_mul(&mut sigma, 1.0, stiffness, strain_elastic)?;
    Ok(sigma)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use super::{rotation_matrix, Axis};
use crate::StrError;
use russell_lab::{mat_mat_mul, mat_vec_mul, Matrix, Vector};

/// Maps Voigt row indices to tensor index pairs in the order (11, 22, 33, 12, 13, 23)
const VOIGT_PAIRS: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (0, 1), (0, 2), (1, 2)];

/// Returns the 6×6 Voigt transformation operator for stress-like tensors
///
/// With `R = rotation_matrix(angle, axis)`, the returned operator `Qs`
/// satisfies `σ' = Qs · σ` for a symmetric tensor packed in the Voigt order
/// (11, 22, 33, 12, 13, 23).
pub fn stress_rotation(angle: f64, axis: Axis) -> Matrix {
    let rr = rotation_matrix(angle, axis);
    voigt_operator(&rr, true)
}

/// Returns the 6×6 Voigt transformation operator for strain-like tensors
///
/// Strain-like tensors carry engineering shear components (γ = 2ε), which
/// moves the factor of two with respect to [stress_rotation]. The two
/// operators are work-conjugate: `Qsᵀ · Qe = I` exactly.
pub fn strain_rotation(angle: f64, axis: Axis) -> Matrix {
    let rr = rotation_matrix(angle, axis);
    voigt_operator(&rr, false)
}

/// Builds the Voigt transformation operator from a 3×3 rotation matrix
fn voigt_operator(rr: &Matrix, stress_like: bool) -> Matrix {
    let mut qq = Matrix::new(6, 6);
    for i in 0..6 {
        let (a, b) = VOIGT_PAIRS[i];
        for j in 0..6 {
            let (c, d) = VOIGT_PAIRS[j];
            let mut value = if j < 3 {
                rr.get(a, c) * rr.get(b, c)
            } else {
                rr.get(a, c) * rr.get(b, d) + rr.get(a, d) * rr.get(b, c)
            };
            // the engineering-shear convention scales rows/columns by diag(1,1,1,2,2,2)
            if !stress_like {
                if i < 3 && j >= 3 {
                    value *= 0.5;
                } else if i >= 3 && j < 3 {
                    value *= 2.0;
                }
            }
            qq.set(i, j, value);
        }
    }
    qq
}

/// Rotates a stress-like Voigt 6-vector about an axis
pub fn rotate_stress(sigma: &Vector, angle: f64, axis: Axis) -> Result<Vector, StrError> {
    if sigma.dim() != 6 {
        return Err("stress-like vector must have dimension 6");
    }
    let qq = stress_rotation(angle, axis);
    let mut res = Vector::new(6);
    mat_vec_mul(&mut res, 1.0, &qq, sigma)?;
    Ok(res)
}

/// Rotates a strain-like Voigt 6-vector (engineering shear) about an axis
pub fn rotate_strain(epsilon: &Vector, angle: f64, axis: Axis) -> Result<Vector, StrError> {
    if epsilon.dim() != 6 {
        return Err("strain-like vector must have dimension 6");
    }
    let qq = strain_rotation(angle, axis);
    let mut res = Vector::new(6);
    mat_vec_mul(&mut res, 1.0, &qq, epsilon)?;
    Ok(res)
}

/// Rotates a stiffness-like 6×6 operator about an axis
///
/// Computes `L' = Qs · L · Qsᵀ`, the rank-4 transformation in Voigt form.
pub fn rotate_stiffness(ll: &Matrix, angle: f64, axis: Axis) -> Result<Matrix, StrError> {
    if ll.dims() != (6, 6) {
        return Err("stiffness-like matrix must have dimensions 6×6");
    }
    let qq = stress_rotation(angle, axis);
    let qq_t = transpose(&qq);
    let mut aux = Matrix::new(6, 6);
    let mut res = Matrix::new(6, 6);
    mat_mat_mul(&mut aux, 1.0, ll, &qq_t, 0.0)?;
    mat_mat_mul(&mut res, 1.0, &qq, &aux, 0.0)?;
    Ok(res)
}

/// Rotates a (generally non-symmetric) 3×3 tensor about an axis
///
/// Computes `F' = R · F · Rᵀ`; used for deformation gradients.
pub fn rotate_def_grad(ff: &Matrix, angle: f64, axis: Axis) -> Result<Matrix, StrError> {
    if ff.dims() != (3, 3) {
        return Err("deformation gradient must have dimensions 3×3");
    }
    let rr = rotation_matrix(angle, axis);
    let rr_t = transpose(&rr);
    let mut aux = Matrix::new(3, 3);
    let mut res = Matrix::new(3, 3);
    mat_mat_mul(&mut aux, 1.0, ff, &rr_t, 0.0)?;
    mat_mat_mul(&mut res, 1.0, &rr, &aux, 0.0)?;
    Ok(res)
}

fn transpose(aa: &Matrix) -> Matrix {
    let (nrow, ncol) = aa.dims();
    let mut res = Matrix::new(ncol, nrow);
    for i in 0..nrow {
        for j in 0..ncol {
            res.set(j, i, aa.get(i, j));
        }
    }
    res
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use russell_lab::Matrix;

/// Defines a coordinate axis for single-axis rotations
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Axis of the first Euler rotation (psi) in the 3-1-3 convention
pub const AXIS_PSI: Axis = Axis::Z;

/// Axis of the second Euler rotation (theta) in the 3-1-3 convention
pub const AXIS_THETA: Axis = Axis::X;

/// Axis of the third Euler rotation (phi) in the 3-1-3 convention
pub const AXIS_PHI: Axis = Axis::Z;

/// Returns the right-handed 3×3 rotation matrix about an axis
///
/// The matrix maps components of a fixed vector from the original frame to
/// the frame rotated by `angle` (rad) about `axis`.
pub fn rotation_matrix(angle: f64, axis: Axis) -> Matrix {
    let (s, c) = angle.sin_cos();
    match axis {
        Axis::X => Matrix::from(&[
            [1.0, 0.0, 0.0], //
            [0.0, c, -s],    //
            [0.0, s, c],     //
        ]),
        Axis::Y => Matrix::from(&[
            [c, 0.0, s],     //
            [0.0, 1.0, 0.0], //
            [-s, 0.0, c],    //
        ]),
        Axis::Z => Matrix::from(&[
            [c, -s, 0.0],    //
            [s, c, 0.0],     //
            [0.0, 0.0, 1.0], //
        ]),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

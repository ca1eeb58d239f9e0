use crate::StrError;
use russell_lab::Vector;

/// Number of constants in the transversely isotropic elastic property vector
pub const N_PROPS_ELASTIC_TRANS_ISO: usize = 8;

/// Holds the constants of the transversely isotropic elastic law by name
///
/// Property files deliver these constants as a positional vector whose layout
/// is load-bearing (it matches existing material databases):
///
/// | index | constant |
/// |-------|----------|
/// | 0 | material axis selector (1, 2, or 3; 1-based) |
/// | 1 | longitudinal Young modulus E_L |
/// | 2 | transverse Young modulus E_T |
/// | 3 | longitudinal-transverse Poisson ratio ν_LT |
/// | 4 | transverse-transverse Poisson ratio ν_TT |
/// | 5 | shear modulus G_LT |
/// | 6 | longitudinal thermal expansion coefficient α_L |
/// | 7 | transverse thermal expansion coefficient α_T |
///
/// This struct is the only place that performs positional access; all other
/// code works with named fields.
#[derive(Clone, Copy, Debug)]
pub struct ParamElasticTransIso {
    /// Material axis selector (1-based: 1, 2, or 3)
    pub axis: usize,

    /// Longitudinal Young modulus E_L
    pub young_l: f64,

    /// Transverse Young modulus E_T
    pub young_t: f64,

    /// Longitudinal-transverse Poisson ratio ν_LT
    pub poisson_lt: f64,

    /// Transverse-transverse Poisson ratio ν_TT
    pub poisson_tt: f64,

    /// Shear modulus G_LT
    pub shear_lt: f64,

    /// Longitudinal thermal expansion coefficient α_L
    pub alpha_l: f64,

    /// Transverse thermal expansion coefficient α_T
    pub alpha_t: f64,
}

impl ParamElasticTransIso {
    /// Decodes the positional property vector
    pub fn from_props(props: &Vector) -> Result<Self, StrError> {
        if props.dim() != N_PROPS_ELASTIC_TRANS_ISO {
            return Err("property vector must have dimension 8");
        }
        let axis = props[0] as usize;
        if props[0] != axis as f64 || !(1..=3).contains(&axis) {
            return Err("material axis must be 1, 2, or 3");
        }
        Ok(ParamElasticTransIso {
            axis,
            young_l: props[1],
            young_t: props[2],
            poisson_lt: props[3],
            poisson_tt: props[4],
            shear_lt: props[5],
            alpha_l: props[6],
            alpha_t: props[7],
        })
    }

    /// Encodes the constants back into the positional layout
    pub fn to_props(&self) -> Vector {
        Vector::from(&[
            self.axis as f64,
            self.young_l,
            self.young_t,
            self.poisson_lt,
            self.poisson_tt,
            self.shear_lt,
            self.alpha_l,
            self.alpha_t,
        ])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParamElasticTransIso;
    use russell_lab::{vec_approx_eq, Vector};

    #[test]
    fn from_props_works() {
        let props = Vector::from(&[1.0, 200e9, 10e9, 0.3, 0.3, 5e9, 1e-6, 1e-5]);
        let param = ParamElasticTransIso::from_props(&props).unwrap();
        assert_eq!(param.axis, 1);
        assert_eq!(param.young_l, 200e9);
        assert_eq!(param.young_t, 10e9);
        assert_eq!(param.poisson_lt, 0.3);
        assert_eq!(param.shear_lt, 5e9);
        assert_eq!(param.alpha_t, 1e-5);
        vec_approx_eq(&param.to_props(), &props, 1e-15);
    }

    #[test]
    fn from_props_captures_errors() {
        let short = Vector::new(7);
        assert_eq!(
            ParamElasticTransIso::from_props(&short).err(),
            Some("property vector must have dimension 8")
        );
        let bad_axis = Vector::from(&[4.0, 1.0, 1.0, 0.3, 0.3, 1.0, 0.0, 0.0]);
        assert_eq!(
            ParamElasticTransIso::from_props(&bad_axis).err(),
            Some("material axis must be 1, 2, or 3")
        );
        let frac_axis = Vector::from(&[1.5, 1.0, 1.0, 0.3, 0.3, 1.0, 0.0, 0.0]);
        assert_eq!(
            ParamElasticTransIso::from_props(&frac_axis).err(),
            Some("material axis must be 1, 2, or 3")
        );
    }
}

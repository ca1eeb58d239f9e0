use matpoint::prelude::*;
use russell_lab::{approx_eq, mat_approx_eq, vec_approx_eq, vec_copy, Vector};

// Local/global frame changes of a loaded material point
//
// This test builds a mechanical state by running the elastic stress-update
// routine in the material (local) frame, then re-expresses the whole
// container in the laboratory (global) frame and back.
//
// TEST GOAL
//
// * `rotate_g2l(rotate_l2g(state))` restores every tensor field within
//   floating tolerance for a full three-angle Euler set
// * scalars, work accumulators and internal values pass through unrotated
// * the rotated stiffness stays consistent with the rotated stress: applying
//   the global-frame operator to the global-frame elastic strain reproduces
//   the global-frame stress

#[test]
fn test_frame_round_trip() -> Result<(), StrError> {
    let config = Config::new();
    let props = Vector::from(&[1.0, 200e9, 10e9, 0.3, 0.3, 5e9, 1e-6, 1e-5]);
    let law = ElasticTransIso::from_props(&config, &props)?;
    let mut state = LocalStateMech::new(law.n_internal_values());
    state.base.temperature = config.temp_ref;
    vec_copy(
        &mut state.base.strain_delta,
        &Vector::from(&[1e-3, -2e-4, 0.0, 5e-4, 0.0, 1e-4]),
    )?;
    law.update_stress(&mut state, true)?;
    state.set_start();

    let (psi, theta, phi) = (0.6, 1.1, -0.8);
    let global = state.rotate_l2g(&config, psi, theta, phi)?;
    let back = global.rotate_g2l(&config, psi, theta, phi)?;

    vec_approx_eq(&back.base.strain_delta, &state.base.strain_delta, 1e-16);
    vec_approx_eq(&back.base.stress, &state.base.stress, 1e-4);
    vec_approx_eq(&back.base.stress_start, &state.base.stress_start, 1e-4);
    mat_approx_eq(&back.stiffness, &state.stiffness, 1.0);
    mat_approx_eq(&back.stiffness_tangent, &state.stiffness_tangent, 1.0);
    assert_eq!(back.base.temperature, state.base.temperature);
    vec_approx_eq(&back.work_mech, &state.work_mech, 1e-15);
    Ok(())
}

#[test]
fn test_rotated_stiffness_is_consistent_with_rotated_stress() -> Result<(), StrError> {
    let config = Config::new();
    let props = Vector::from(&[3.0, 180e9, 12e9, 0.28, 0.4, 6e9, 0.0, 0.0]);
    let law = ElasticTransIso::from_props(&config, &props)?;
    let mut state = LocalStateMech::new(0);
    state.base.temperature = config.temp_ref;
    vec_copy(
        &mut state.base.strain_delta,
        &Vector::from(&[2e-4, 1e-4, -3e-4, 0.0, 4e-4, 0.0]),
    )?;
    law.update_stress(&mut state, true)?;

    let (psi, theta, phi) = (0.4, -0.7, 1.3);
    let global = state.rotate_l2g(&config, psi, theta, phi)?;

    // σ_g must equal L_g · Δε_g component by component
    let mut predicted = Vector::new(6);
    russell_lab::mat_vec_mul(&mut predicted, 1.0, &global.stiffness, &global.base.strain_delta)?;
    for i in 0..6 {
        approx_eq(predicted[i], global.base.stress[i], 1e-2);
    }
    Ok(())
}

#[test]
fn test_zero_angles_change_nothing() -> Result<(), StrError> {
    let config = Config::new();
    let mut state = LocalState::new(1);
    state.stress[0] = 42.0;
    state.strain[3] = 7e-3;
    state.internal_values[0] = 0.123;
    let res = state.rotate_l2g(&config, 0.0, 1e-16, -1e-13)?;
    // below iota every field is bit-identical
    assert_eq!(res.stress[0], 42.0);
    assert_eq!(res.strain[3], 7e-3);
    assert_eq!(res.internal_values[0], 0.123);
    Ok(())
}

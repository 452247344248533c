use approx::assert_relative_eq;
use body_core::constants::{MEARTH, MSUN, REARTH, RSUN};
use body_massradius::{MassRadiusError, MassRadiusRelation, fits, mass_to_radius, radius_to_mass};

#[test]
fn unknown_relation_id_is_an_error_not_infinity() {
    assert_eq!(
        mass_to_radius(MSUN, 4),
        Err(MassRadiusError::UnsupportedRelation(4))
    );
    assert_eq!(
        radius_to_mass(RSUN, -1),
        Err(MassRadiusError::UnsupportedRelation(-1))
    );
}

#[test]
fn dispatch_matches_direct_fits() {
    let mass = 1.7 * MEARTH;
    assert_eq!(mass_to_radius(mass, 3), Ok(fits::mass_to_radius_sotin(mass)));
    assert_eq!(
        mass_to_radius(MSUN, 0),
        Ok(fits::mass_to_radius_reid_hawley(MSUN))
    );
    assert_eq!(
        mass_to_radius(0.4 * MSUN, 2),
        Ok(fits::mass_to_radius_bayless_orosz(0.4 * MSUN))
    );
    assert_eq!(
        radius_to_mass(0.8 * RSUN, 1),
        Ok(fits::radius_to_mass_gorda_svechnikov(0.8 * RSUN))
    );
}

#[test]
fn reid_hawley_solar_mass_radius() {
    // The fit overshoots the Sun by ~39% (10^0.1424).
    let radius = mass_to_radius(MSUN, 0).expect("reid-hawley radius");
    let ratio = radius / RSUN;
    assert!((1.3..1.45).contains(&ratio), "R/Rsun = {ratio}");
}

#[test]
fn sotin_recovers_earth() {
    let mass = radius_to_mass(REARTH, 3).expect("sotin mass");
    assert_relative_eq!(mass, MEARTH, max_relative = 1e-12);
    let radius = mass_to_radius(MEARTH, 3).expect("sotin radius");
    assert_relative_eq!(radius, REARTH, max_relative = 1e-12);
}

#[test]
fn sotin_round_trips_within_exponent_mismatch() {
    // 0.272 * 3.6765 = 1.000008, so the round trip drifts by m^8e-6.
    for factor in [0.1, 0.5, 1.0, 3.0, 10.0] {
        let mass = factor * MEARTH;
        let radius = mass_to_radius(mass, 3).unwrap();
        let back = radius_to_mass(radius, 3).unwrap();
        assert_relative_eq!(back, mass, max_relative = 1e-4);
    }
}

#[test]
fn stellar_relations_do_not_round_trip() {
    let mass = 2.0 * MSUN;
    for id in 0..3 {
        let radius = mass_to_radius(mass, id).expect("forward fit");
        let back = radius_to_mass(radius, id).expect("reverse fit");
        let drift = ((back - mass) / mass).abs();
        assert!(
            drift > 0.05,
            "relation {id} unexpectedly round-tripped (drift {drift})"
        );
    }
}

#[test]
fn gorda_svechnikov_is_undefined_below_one_solar_mass() {
    let err = mass_to_radius(0.5 * MSUN, 1).unwrap_err();
    assert!(matches!(
        err,
        MassRadiusError::OutOfDomain {
            relation: MassRadiusRelation::GordaSvechnikov,
            ..
        }
    ));
    assert!(err.to_string().contains("gorda-svechnikov"));
}

#[test]
fn gorda_svechnikov_rejects_exactly_one_solar_mass() {
    assert_eq!(
        MassRadiusRelation::GordaSvechnikov.mass_to_radius(MSUN),
        Err(MassRadiusError::OutOfDomain {
            relation: MassRadiusRelation::GordaSvechnikov,
            input: MSUN,
        })
    );
    assert!(mass_to_radius(1.001 * MSUN, 1).unwrap() > 0.0);
}

#[test]
fn gorda_svechnikov_branches_meet_their_own_coefficients() {
    // log10(M/Msun) = 0.3 takes the upper branch.
    let mass = 10f64.powf(0.3) * MSUN;
    let expected = 10f64.powf(0.096 + 0.652 * 0.3f64.log10()) * RSUN;
    assert_relative_eq!(
        mass_to_radius(mass, 1).unwrap(),
        expected,
        max_relative = 1e-12
    );

    // log10(M/Msun) = 0.1 takes the lower branch.
    let mass = 10f64.powf(0.1) * MSUN;
    let expected = 10f64.powf(0.1 + 1.03 * 0.1f64.log10()) * RSUN;
    assert_relative_eq!(
        mass_to_radius(mass, 1).unwrap(),
        expected,
        max_relative = 1e-12
    );
}

#[test]
fn typed_relation_agrees_with_integer_dispatch() {
    for relation in MassRadiusRelation::ALL {
        let mass = 3.0 * MSUN;
        assert_eq!(
            relation.mass_to_radius(mass),
            mass_to_radius(mass, relation.id())
        );
    }
}

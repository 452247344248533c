use approx::assert_relative_eq;
use body_physics::body::{BodyType, Orbit};
use body_physics::config::{SystemConfig, load_system};
use body_physics::core::constants::{AUM, BIGG, DAYSEC, MEARTH, MSUN, REARTH, RSUN};
use body_physics::evolve::body_copy;
use body_physics::massradius::MassRadiusError;
use body_physics::snapshot;
use body_physics::system::{MANIFEST_FIELDS_MODULE, SystemError, build_bodies, build_system};

fn solar() -> SystemConfig {
    load_system("data/systems/solar.yaml").expect("solar manifest")
}

#[test]
fn solar_manifest_builds_si_bodies() {
    let system = build_system(&solar()).expect("solar system");
    assert_eq!(system.name, "solar");
    assert_eq!(system.bodies.len(), 3);

    let sun = &system.bodies[0];
    assert_eq!(sun.body_type, BodyType::Star);
    assert!(sun.orbit.is_primary());
    assert_eq!(sun.mass, MSUN);
    assert_eq!(sun.radius, RSUN);
    assert_relative_eq!(sun.rotation_period(), 25.4 * DAYSEC, max_relative = 1e-12);

    let earth = &system.bodies[1];
    // Sotin radius for one Earth mass.
    assert_relative_eq!(earth.radius, REARTH, max_relative = 1e-12);
    assert_relative_eq!(earth.obliquity_vector.z, 23.44f64.to_radians().cos());
    let elements = earth.orbit.elements().expect("earth orbit");
    assert_relative_eq!(elements.semi_major_axis, AUM);
    assert_relative_eq!(elements.eccentricity(), 0.0167, max_relative = 1e-12);
    let expected_n = (BIGG * (MSUN + MEARTH) / AUM.powi(3)).sqrt();
    assert_relative_eq!(elements.mean_motion, expected_n);
    assert_eq!(earth.module_state.get("tidal_q"), Some(12.0));

    assert_eq!(system.evolve.num_modules(0), 0);
    assert_eq!(system.evolve.num_modules(1), 1);
    assert_eq!(system.evolve.modules(1)[0].name(), MANIFEST_FIELDS_MODULE);
}

#[test]
fn toml_manifest_derives_missing_parameters() {
    let config = load_system("data/systems/trappist1.toml").expect("trappist manifest");
    let bodies = build_bodies(&config).expect("trappist bodies");
    let star = &bodies[0];
    // Bayless-Orosz: 0.0324 + 0.9343 m + 0.0374 m^2 in solar units.
    let m = 0.0898;
    assert_relative_eq!(
        star.radius,
        (0.0324 + 0.9343 * m + 0.0374 * m * m) * RSUN,
        max_relative = 1e-12
    );
    let planet_b = &bodies[1];
    assert_relative_eq!(
        planet_b.mass,
        1.116f64.powf(3.6765) * MEARTH,
        max_relative = 1e-12
    );
    assert!(matches!(bodies[2].orbit, Orbit::Orbiting(_)));
}

#[test]
fn manifest_errors_are_named() {
    let mut config = solar();
    config.bodies[1].mass_radius = None;
    assert!(matches!(
        build_bodies(&config),
        Err(SystemError::MissingRelation(name)) if name == "earth"
    ));

    let mut config = solar();
    config.bodies[1].mass_radius = Some("made-up".into());
    assert!(matches!(
        build_bodies(&config),
        Err(SystemError::Relation {
            source: MassRadiusError::UnknownRelationName(_),
            ..
        })
    ));

    let mut config = solar();
    config.bodies[2].semi_major_axis_au = None;
    assert!(matches!(
        build_bodies(&config),
        Err(SystemError::MissingSemiMajorAxis(name)) if name == "jupiter"
    ));

    let mut config = solar();
    config.bodies.clear();
    assert!(matches!(build_bodies(&config), Err(SystemError::Empty(_))));
}

#[test]
fn binary_manifest_needs_orbit_on_body_zero() {
    let mut config = solar();
    config.binary = true;
    assert!(matches!(
        build_bodies(&config),
        Err(SystemError::MissingSemiMajorAxis(name)) if name == "sun"
    ));
    config.bodies[0].semi_major_axis_au = Some(0.1);
    let bodies = build_bodies(&config).expect("binary bodies");
    assert!(!bodies[0].orbit.is_primary());
}

#[test]
fn built_system_propagates_into_fresh_copy() {
    let system = build_system(&solar()).unwrap();
    let mut next = system.bodies.clone();
    for body in &mut next {
        body.mass = 0.0;
        body.module_state.set("tidal_q", -1.0);
    }
    body_copy(&mut next, &system.bodies, &system.evolve).unwrap();
    assert_eq!(next[1].mass, system.bodies[1].mass);
    assert_eq!(next[1].module_state.get("tidal_q"), Some(12.0));
    // No module on the sun, so its extra field survives.
    assert_eq!(next[0].module_state.get("tidal_q"), Some(-1.0));

    let records = snapshot::records(&next);
    assert_eq!(records[0].semi_major_axis_m, None);
    assert_eq!(records[1].semi_major_axis_m, Some(AUM));
}

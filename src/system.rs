//! Conversion of parsed system manifests into SI body arrays.
//!
//! Manifest values are option parameters in friendly units; the resulting
//! [`Body`] fields are the internally consistent system parameters. A body that
//! gives only one of mass and radius gets the other from its mass-radius
//! relation.

use thiserror::Error;

use body_config::{
    BodyConfig, BodyTypeConfig, MassUnit, RadiusUnit, SystemConfig, TidesModelConfig,
};
use body_core::constants::BIGG;
use body_core::math::period_to_frequency;
use body_core::{time, units};
use body_massradius::{MassRadiusError, MassRadiusRelation};

use crate::body::{Body, BodyType, ModuleState, Orbit, OrbitalElements};
use crate::evolve::{Evolve, FieldCopy, PropagationError, TidesModel, validate_layout};

/// Name of the module that carries manifest `module_fields` between steps.
pub const MANIFEST_FIELDS_MODULE: &str = "manifest-fields";

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("system `{0}` has no bodies")]
    Empty(String),
    #[error("body `{0}` needs a mass or a radius")]
    MissingMassAndRadius(String),
    #[error("body `{0}` gives only one of mass and radius but names no mass-radius relation")]
    MissingRelation(String),
    #[error("body `{body}`: {source}")]
    Relation {
        body: String,
        #[source]
        source: MassRadiusError,
    },
    #[error("body `{0}` orbits but has no semi-major axis")]
    MissingSemiMajorAxis(String),
    #[error(transparent)]
    Layout(#[from] PropagationError),
}

/// A ready-to-evolve system: its bodies and the session context that copies them.
#[derive(Debug)]
pub struct System {
    pub name: String,
    pub bodies: Vec<Body>,
    pub evolve: Evolve,
}

/// Build bodies and a session context from a manifest.
///
/// Bodies with `module_fields` get a [`FieldCopy`] module carrying those keys.
pub fn build_system(config: &SystemConfig) -> Result<System, SystemError> {
    let bodies = build_bodies(config)?;
    let mut evolve = Evolve::new(bodies.len(), tides_model(config.tides_model))
        .with_binary(config.binary);
    for (index, body_config) in config.bodies.iter().enumerate() {
        if body_config.module_fields.is_empty() {
            continue;
        }
        let module = FieldCopy::new(
            MANIFEST_FIELDS_MODULE,
            body_config.module_fields.keys().cloned(),
        );
        evolve.attach(index, module)?;
    }
    Ok(System {
        name: config.name.clone(),
        bodies,
        evolve,
    })
}

/// Convert every body of the manifest into SI state.
pub fn build_bodies(config: &SystemConfig) -> Result<Vec<Body>, SystemError> {
    if config.bodies.is_empty() {
        return Err(SystemError::Empty(config.name.clone()));
    }

    let mut bodies = config
        .bodies
        .iter()
        .map(physical_body)
        .collect::<Result<Vec<_>, _>>()?;

    let masses: Vec<f64> = bodies.iter().map(|b| b.mass).collect();
    for (index, (body, body_config)) in bodies.iter_mut().zip(&config.bodies).enumerate() {
        if index == 0 && !config.binary {
            if body_config.semi_major_axis_au.is_some() {
                tracing::warn!(
                    body = %body.name,
                    "ignoring orbit of the primary in a single-star system"
                );
            }
            continue;
        }
        let central_mass = if index == 0 {
            masses.get(1).copied().unwrap_or(0.0)
        } else {
            masses[0]
        };
        body.orbit = Orbit::Orbiting(orbital_elements(body_config, central_mass, body.mass)?);
    }

    validate_layout(&bodies, config.binary)?;
    Ok(bodies)
}

fn physical_body(config: &BodyConfig) -> Result<Body, SystemError> {
    let mass = config.mass.map(|m| mass_to_kg(m, config.mass_unit));
    let radius = config.radius.map(|r| radius_to_m(r, config.radius_unit));
    let (mass, radius) = resolve_mass_radius(config, mass, radius)?;

    let body_type = match config.body_type {
        BodyTypeConfig::Planet => BodyType::Planet,
        BodyTypeConfig::Star => BodyType::Star,
    };
    let mut body = Body::new(config.name.clone(), body_type, mass, radius)
        .with_obliquity(
            config.obliquity_deg.to_radians(),
            config.precession_deg.to_radians(),
        );
    body.rad_gyra = config.radius_of_gyration;
    body.age = time::years_to_seconds(config.age_years);
    if let Some(days) = config.rotation_period_days {
        body.rot_rate = period_to_frequency(time::days_to_seconds(days));
    }
    body.module_state = config
        .module_fields
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect::<ModuleState>();
    Ok(body)
}

fn resolve_mass_radius(
    config: &BodyConfig,
    mass: Option<f64>,
    radius: Option<f64>,
) -> Result<(f64, f64), SystemError> {
    let relation = || -> Result<MassRadiusRelation, SystemError> {
        let name = config
            .mass_radius
            .as_deref()
            .ok_or_else(|| SystemError::MissingRelation(config.name.clone()))?;
        name.parse().map_err(|source| SystemError::Relation {
            body: config.name.clone(),
            source,
        })
    };
    let wrap = |source| SystemError::Relation {
        body: config.name.clone(),
        source,
    };

    match (mass, radius) {
        (Some(mass), Some(radius)) => Ok((mass, radius)),
        (Some(mass), None) => Ok((mass, relation()?.mass_to_radius(mass).map_err(wrap)?)),
        (None, Some(radius)) => Ok((relation()?.radius_to_mass(radius).map_err(wrap)?, radius)),
        (None, None) => Err(SystemError::MissingMassAndRadius(config.name.clone())),
    }
}

fn orbital_elements(
    config: &BodyConfig,
    central_mass: f64,
    mass: f64,
) -> Result<OrbitalElements, SystemError> {
    let semi = config
        .semi_major_axis_au
        .map(units::au_to_m)
        .ok_or_else(|| SystemError::MissingSemiMajorAxis(config.name.clone()))?;
    let mean_motion = (BIGG * (central_mass + mass) / semi.powi(3)).sqrt();
    Ok(OrbitalElements::from_eccentricity(
        config.eccentricity,
        config.longitude_of_pericenter_deg.to_radians(),
        semi,
        mean_motion,
    ))
}

fn mass_to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kg => value,
        MassUnit::Earth => units::earth_masses_to_kg(value),
        MassUnit::Jupiter => units::jupiter_masses_to_kg(value),
        MassUnit::Sun => units::solar_masses_to_kg(value),
    }
}

fn radius_to_m(value: f64, unit: RadiusUnit) -> f64 {
    match unit {
        RadiusUnit::M => value,
        RadiusUnit::Earth => units::earth_radii_to_m(value),
        RadiusUnit::Jupiter => units::jupiter_radii_to_m(value),
        RadiusUnit::Sun => units::solar_radii_to_m(value),
    }
}

fn tides_model(config: TidesModelConfig) -> TidesModel {
    match config {
        TidesModelConfig::Cpl => TidesModel::ConstantPhaseLag,
        TidesModelConfig::Ctl => TidesModel::ConstantTimeLag,
        TidesModelConfig::Db15 => TidesModel::Db15,
    }
}

//! Flatten body arrays into export records.

use body_export::snapshot::BodyRecord;

use crate::body::{Body, BodyType};

pub fn record(body: &Body) -> BodyRecord {
    let elements = body.orbit.elements();
    BodyRecord {
        name: body.name.clone(),
        body_type: match body.body_type {
            BodyType::Planet => "planet",
            BodyType::Star => "star",
        }
        .to_string(),
        mass_kg: body.mass,
        radius_m: body.radius,
        rad_gyra: body.rad_gyra,
        rot_rate_rad_s: body.rot_rate,
        age_s: body.age,
        xobl: body.obliquity_vector.x,
        yobl: body.obliquity_vector.y,
        zobl: body.obliquity_vector.z,
        semi_major_axis_m: elements.map(|e| e.semi_major_axis),
        eccentricity: elements.map(|e| e.eccentricity()),
        mean_motion_rad_s: elements.map(|e| e.mean_motion),
        potential_energy_j: body.potential_energy(),
        rot_angular_momentum_kg_m2_s: body.rotational_angular_momentum(),
        rot_kinetic_energy_j: body.rotational_kinetic_energy(),
        dynamical_ellipticity: body.dynamical_ellipticity_equilibrium(),
    }
}

pub fn records(bodies: &[Body]) -> Vec<BodyRecord> {
    bodies.iter().map(record).collect()
}

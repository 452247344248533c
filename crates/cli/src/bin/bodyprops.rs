use std::path::PathBuf;

use anyhow::Context;
use body_physics::body::{Body, BodyType};
use body_physics::config::load_system;
use body_physics::core::{constants, time, units};
use body_physics::export::snapshot::{OutputTarget, write_csv, write_json};
use body_physics::{snapshot, system};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print derived physical properties of every body in a system manifest"
)]
struct Cli {
    /// System manifest (YAML, or TOML by extension)
    #[arg(long)]
    system: PathBuf,

    /// Write a JSON snapshot to this path (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write a CSV snapshot to this path (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_system(&cli.system)
        .with_context(|| format!("loading manifest {}", cli.system.display()))?;
    let system = system::build_system(&config)?;

    println!(
        "=== System: {} ({} bodies) ===",
        system.name,
        system.bodies.len()
    );
    for body in &system.bodies {
        print_body(body);
    }

    let records = snapshot::records(&system.bodies);
    if let Some(path) = &cli.json {
        write_json(OutputTarget::from(path.as_path()).open()?, &system.name, &records)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &cli.csv {
        write_csv(OutputTarget::from(path.as_path()).open()?, &records)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

fn print_body(body: &Body) {
    let (mass, mass_unit, radius, radius_unit) = match body.body_type {
        BodyType::Star => (
            body.mass / constants::MSUN,
            "Msun",
            body.radius / constants::RSUN,
            "Rsun",
        ),
        BodyType::Planet => (
            body.mass / constants::MEARTH,
            "Mearth",
            body.radius / constants::REARTH,
            "Rearth",
        ),
    };
    println!("--- {} ---", body.name);
    println!("Mass            : {mass:.6} {mass_unit} ({:.6e} kg)", body.mass);
    println!("Radius          : {radius:.6} {radius_unit} ({:.6e} m)", body.radius);
    println!("Age             : {:.4e} yr", time::seconds_to_years(body.age));
    if body.rot_rate != 0.0 {
        println!(
            "Rotation        : {:.6} days, v_eq = {:.3} m/s",
            time::seconds_to_days(body.rotation_period()),
            body.rotational_velocity()
        );
    } else {
        println!("Rotation        : none");
    }
    println!(
        "Obliquity       : {:.4} deg (x={:.6}, y={:.6}, z={:.6})",
        body.obliquity_vector.obliquity().to_degrees(),
        body.obliquity_vector.x,
        body.obliquity_vector.y,
        body.obliquity_vector.z
    );
    println!("Potential energy: {:.6e} J", body.potential_energy());
    println!(
        "Spin            : L = {:.6e} kg m^2/s, E = {:.6e} J",
        body.rotational_angular_momentum(),
        body.rotational_kinetic_energy()
    );
    println!(
        "Dyn. ellipticity: {:.6e}",
        body.dynamical_ellipticity_equilibrium()
    );
    if let Some(elements) = body.orbit.elements() {
        println!(
            "Orbit           : a = {:.6} AU, e = {:.6}, n = {:.6e} rad/s",
            units::m_to_au(elements.semi_major_axis),
            elements.eccentricity(),
            elements.mean_motion
        );
    }
}

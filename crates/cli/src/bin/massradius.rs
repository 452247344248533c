use anyhow::{Context, bail};
use body_physics::core::constants::{MEARTH, MJUP, MSUN, REARTH, RJUP, RSUN};
use body_physics::massradius::MassRadiusRelation;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Evaluate an empirical mass-radius relation")]
struct Cli {
    /// Relation name (reid-hawley, gorda-svechnikov, bayless-orosz, sotin)
    #[arg(long)]
    relation: String,

    /// Mass to convert into a radius
    #[arg(long, conflicts_with = "radius")]
    mass: Option<f64>,

    /// Radius to convert into a mass
    #[arg(long)]
    radius: Option<f64>,

    /// Unit of the input and the scaled output
    #[arg(long, value_enum, default_value_t = Unit::Si)]
    unit: Unit,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Unit {
    Si,
    Earth,
    Jupiter,
    Sun,
}

impl Unit {
    fn mass_scale(self) -> (f64, &'static str) {
        match self {
            Unit::Si => (1.0, "kg"),
            Unit::Earth => (MEARTH, "Mearth"),
            Unit::Jupiter => (MJUP, "Mjup"),
            Unit::Sun => (MSUN, "Msun"),
        }
    }

    fn radius_scale(self) -> (f64, &'static str) {
        match self {
            Unit::Si => (1.0, "m"),
            Unit::Earth => (REARTH, "Rearth"),
            Unit::Jupiter => (RJUP, "Rjup"),
            Unit::Sun => (RSUN, "Rsun"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let relation: MassRadiusRelation = cli.relation.parse().with_context(|| {
        let known: Vec<_> = MassRadiusRelation::ALL.iter().map(|r| r.name()).collect();
        format!("known relations: {}", known.join(", "))
    })?;
    let (mass_scale, mass_unit) = cli.unit.mass_scale();
    let (radius_scale, radius_unit) = cli.unit.radius_scale();

    match (cli.mass, cli.radius) {
        (Some(mass), None) => {
            let radius = relation.mass_to_radius(mass * mass_scale)?;
            println!(
                "{relation}: radius = {:.6} {radius_unit} ({radius:.6e} m)",
                radius / radius_scale
            );
        }
        (None, Some(radius)) => {
            let mass = relation.radius_to_mass(radius * radius_scale)?;
            println!(
                "{relation}: mass = {:.6} {mass_unit} ({mass:.6e} kg)",
                mass / mass_scale
            );
        }
        _ => bail!("pass exactly one of --mass or --radius"),
    }

    Ok(())
}

//! Configuration models and loaders for planetary system manifests.
//!
//! A manifest lists the bodies of one system with their input parameters in
//! convenient units. Conversion into SI body state happens in `body_physics`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// One planetary system parsed from a manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    pub name: String,
    #[serde(default)]
    pub tides_model: TidesModelConfig,
    /// Body 0 orbits too when set.
    #[serde(default)]
    pub binary: bool,
    pub bodies: Vec<BodyConfig>,
}

/// Input parameters of a single body.
///
/// Either `mass` or `radius` may be omitted when `mass_radius` names a relation
/// to derive it from.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub body_type: BodyTypeConfig,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub mass_unit: MassUnit,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub radius_unit: RadiusUnit,
    #[serde(default)]
    pub mass_radius: Option<String>,
    #[serde(default = "default_radius_of_gyration")]
    pub radius_of_gyration: f64,
    #[serde(default)]
    pub obliquity_deg: f64,
    #[serde(default)]
    pub precession_deg: f64,
    #[serde(default)]
    pub rotation_period_days: Option<f64>,
    #[serde(default)]
    pub age_years: f64,
    #[serde(default)]
    pub semi_major_axis_au: Option<f64>,
    #[serde(default)]
    pub eccentricity: f64,
    #[serde(default)]
    pub longitude_of_pericenter_deg: f64,
    #[serde(default)]
    pub module_fields: BTreeMap<String, f64>,
}

fn default_radius_of_gyration() -> f64 {
    0.5
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyTypeConfig {
    #[default]
    Planet,
    Star,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TidesModelConfig {
    #[default]
    Cpl,
    Ctl,
    Db15,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Kg,
    Earth,
    Jupiter,
    Sun,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RadiusUnit {
    #[default]
    M,
    Earth,
    Jupiter,
    Sun,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Manifest syntax, chosen by file extension. Anything that is not `.toml`
/// is read as YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Yaml,
    Toml,
}

impl ManifestFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Yaml,
        }
    }

    fn is_manifest(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("toml" | "yaml" | "yml")
        )
    }

    fn parse<T: DeserializeOwned>(self, contents: &str) -> Result<T, ConfigError> {
        Ok(match self {
            ManifestFormat::Yaml => serde_yaml::from_str(contents)?,
            ManifestFormat::Toml => toml::from_str(contents)?,
        })
    }
}

/// Load a single system from a YAML or TOML file.
pub fn load_system<P: AsRef<Path>>(path: P) -> Result<SystemConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    ManifestFormat::of(path).parse(&contents)
}

/// Load systems from a manifest path.
///
/// A YAML file holds a list of systems and a TOML file holds one. A directory
/// contributes one system per `.toml`, `.yaml` or `.yml` file, in file name order.
pub fn load_systems<P: AsRef<Path>>(path: P) -> Result<Vec<SystemConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        return manifest_paths(path)?.iter().map(load_system).collect();
    }
    let contents = fs::read_to_string(path)?;
    match ManifestFormat::of(path) {
        ManifestFormat::Toml => Ok(vec![ManifestFormat::Toml.parse(&contents)?]),
        ManifestFormat::Yaml => ManifestFormat::Yaml.parse(&contents),
    }
}

fn manifest_paths(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && ManifestFormat::is_manifest(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    tracing::debug!(dir = %dir.display(), count = paths.len(), "found system manifests");
    Ok(paths)
}

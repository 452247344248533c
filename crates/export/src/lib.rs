//! Export helpers for CSV and JSON body snapshots.

pub mod snapshot {
    use serde::{Deserialize, Serialize};
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::{Path, PathBuf};

    /// Where a snapshot goes: standard output for `-`, otherwise a file whose
    /// parent directories are created on open.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum OutputTarget {
        Stdout,
        File(PathBuf),
    }

    impl OutputTarget {
        pub fn open(&self) -> io::Result<Box<dyn Write>> {
            match self {
                OutputTarget::Stdout => Ok(Box::new(BufWriter::new(io::stdout()))),
                OutputTarget::File(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent)?;
                    }
                    Ok(Box::new(BufWriter::new(File::create(path)?)))
                }
            }
        }
    }

    impl From<&Path> for OutputTarget {
        fn from(path: &Path) -> Self {
            if path == Path::new("-") {
                OutputTarget::Stdout
            } else {
                OutputTarget::File(path.to_path_buf())
            }
        }
    }

    /// One body's state and derived quantities, SI units throughout.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct BodyRecord {
        pub name: String,
        pub body_type: String,
        pub mass_kg: f64,
        pub radius_m: f64,
        pub rad_gyra: f64,
        pub rot_rate_rad_s: f64,
        pub age_s: f64,
        pub xobl: f64,
        pub yobl: f64,
        pub zobl: f64,
        pub semi_major_axis_m: Option<f64>,
        pub eccentricity: Option<f64>,
        pub mean_motion_rad_s: Option<f64>,
        pub potential_energy_j: f64,
        pub rot_angular_momentum_kg_m2_s: f64,
        pub rot_kinetic_energy_j: f64,
        pub dynamical_ellipticity: f64,
    }

    #[derive(Serialize)]
    struct SnapshotDocument<'a> {
        system: &'a str,
        bodies: &'a [BodyRecord],
    }

    /// Write records as CSV with a header row. Orbit columns are empty for primaries.
    pub fn write_csv<W: Write>(writer: W, records: &[BodyRecord]) -> io::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()
    }

    /// Write records as a pretty-printed JSON document tagged with the system name.
    pub fn write_json<W: Write>(writer: W, system: &str, records: &[BodyRecord]) -> io::Result<()> {
        let document = SnapshotDocument {
            system,
            bodies: records,
        };
        to_writer_pretty(writer, &document)?;
        Ok(())
    }
}

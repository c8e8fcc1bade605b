use anyhow::{Context, Result, bail};
use clap::Args;

use amber_rename::Structure;
use amber_rename::ops::{DisulfideCutoffs, RenameConfig, clean_structure, rename_residues};

use crate::commands::{TerminologyArg, run_with_spinner};

/// Converts an MCCE-labeled structure into AMBER naming.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Residue naming convention of the output.
    #[arg(short, long, value_enum, default_value_t = TerminologyArg::Amber)]
    pub terminology: TerminologyArg,
    /// Leave NTR/NTG/CTR markers unrenamed.
    #[arg(long)]
    pub no_termini: bool,
    /// Skip residue renaming and only clean up and renumber.
    #[arg(long)]
    pub keep_names: bool,
    /// Minimum SG-SG distance (Å) recognized as a disulfide bond.
    #[arg(long, value_name = "ANGSTROM", default_value_t = DisulfideCutoffs::default().min)]
    pub ss_min: f64,
    /// Maximum SG-SG distance (Å) recognized as a disulfide bond.
    #[arg(long, value_name = "ANGSTROM", default_value_t = DisulfideCutoffs::default().max)]
    pub ss_max: f64,
}

impl ConvertArgs {
    fn rename_config(&self) -> Result<RenameConfig> {
        if self.ss_min > self.ss_max {
            bail!(
                "--ss-min ({}) must not exceed --ss-max ({})",
                self.ss_min,
                self.ss_max
            );
        }

        Ok(RenameConfig {
            terminology: self.terminology.into(),
            rename_termini: !self.no_termini,
            disulfide: DisulfideCutoffs::new(self.ss_min, self.ss_max),
        })
    }
}

/// Renames residues (unless disabled) and cleans the structure for output.
pub fn run(structure: &mut Structure, args: &ConvertArgs) -> Result<()> {
    let config = args.rename_config()?;

    if args.keep_names {
        log::info!("Residue renaming skipped");
    } else {
        let report = run_with_spinner("Renaming residues", || {
            rename_residues(structure, &config).context("Failed to rename residues")
        })?;
        log::info!("Renamed {report}");
    }

    run_with_spinner("Cleaning structure", || {
        clean_structure(structure).context("Failed to clean structure")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use amber_rename::Terminology;

    fn args() -> ConvertArgs {
        ConvertArgs {
            terminology: TerminologyArg::Gamber,
            no_termini: true,
            keep_names: false,
            ss_min: 1.9,
            ss_max: 2.1,
        }
    }

    #[test]
    fn arguments_map_onto_rename_config() {
        let config = args().rename_config().unwrap();

        assert_eq!(config.terminology, Terminology::GromacsAmber);
        assert!(!config.rename_termini);
        assert_eq!(config.disulfide, DisulfideCutoffs::new(1.9, 2.1));
    }

    #[test]
    fn inverted_disulfide_window_is_rejected() {
        let inverted = ConvertArgs {
            ss_min: 2.5,
            ss_max: 2.0,
            ..args()
        };

        assert!(inverted.rename_config().is_err());
    }
}

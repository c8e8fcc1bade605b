use anyhow::{Context, Result};
use clap::Args;

use amber_rename::Structure;
use amber_rename::ops::{clean_structure, rename_modeled_termini};

use crate::commands::run_with_spinner;

/// Renames the termini of a structure built by an external modeller.
#[derive(Debug, Default, Args)]
pub struct ModeledArgs {
    /// Keep the input's occupancies, elements and numbering.
    #[arg(long)]
    pub no_cleanup: bool,
}

/// Renames chain ends, lysines and histidines, then cleans the structure.
pub fn run(structure: &mut Structure, args: &ModeledArgs) -> Result<()> {
    run_with_spinner("Renaming termini", || {
        rename_modeled_termini(structure).context("Failed to rename modeled termini")
    })?;

    if args.no_cleanup {
        return Ok(());
    }

    run_with_spinner("Cleaning structure", || {
        clean_structure(structure).context("Failed to clean structure")
    })
}

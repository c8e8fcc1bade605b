use anyhow::Result;
use clap::Args;

use amber_rename::Structure;
use amber_rename::ops::renumber_atoms;

/// Rewrites atom serial numbers without touching anything else.
#[derive(Debug, Default, Args)]
pub struct RenumberArgs {}

pub fn run(structure: &mut Structure, _args: &RenumberArgs) -> Result<()> {
    renumber_atoms(structure);
    log::info!("Renumbered {} atom(s)", structure.atom_count());
    Ok(())
}

use super::disulfide::{self, DisulfideCutoffs};
use super::{charge, histidine, termini};
use crate::model::{structure::Structure, types::Terminology};
use crate::ops::error::Error;
use std::fmt;

/// Options controlling [`rename_residues`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenameConfig {
    /// Naming convention for charge states and bridged cysteines.
    pub terminology: Terminology,
    /// Rename `NTR`/`NTG`/`CTR` marker pairs when `true`.
    pub rename_termini: bool,
    /// Sulfur distance window used for disulfide detection.
    pub disulfide: DisulfideCutoffs,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            terminology: Terminology::default(),
            rename_termini: true,
            disulfide: DisulfideCutoffs::default(),
        }
    }
}

impl RenameConfig {
    pub fn new(terminology: Terminology) -> Self {
        Self {
            terminology,
            ..Default::default()
        }
    }
}

/// Number of residues touched by each renaming pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub charge_states: usize,
    pub histidines: usize,
    pub disulfides: usize,
    pub terminus_pairs: usize,
}

impl fmt::Display for RenameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} charge state(s), {} histidine(s), {} bridged cysteine(s), {} terminus pair(s)",
            self.charge_states, self.histidines, self.disulfides, self.terminus_pairs
        )
    }
}

/// Converts MCCE residue names to the selected AMBER naming.
///
/// Passes run in a fixed order: charge states, histidine tautomers, disulfides, then
/// (optionally) termini. The structure is left nested; call
/// [`clean_structure`](super::clean_structure) before writing.
///
/// # Arguments
///
/// * `structure` - Nested, MCCE-labeled structure renamed in place.
/// * `config` - Terminology, terminus switch and disulfide cutoffs.
///
/// # Returns
///
/// A [`RenameReport`] counting the residues each pass renamed.
///
/// # Errors
///
/// Propagates the first [`Error`] raised by a pass; later passes do not run.
pub fn rename_residues(
    structure: &mut Structure,
    config: &RenameConfig,
) -> Result<RenameReport, Error> {
    let mut report = RenameReport {
        charge_states: charge::rename_charge_states(structure, config.terminology),
        ..Default::default()
    };
    report.histidines = histidine::assign_histidine_tautomers(structure)?;
    report.disulfides =
        disulfide::rename_disulfides(structure, config.terminology, config.disulfide)?;

    if config.rename_termini {
        report.terminus_pairs = termini::rename_termini(structure)?;
    } else {
        log::debug!("Terminus renaming disabled");
    }

    Ok(report)
}

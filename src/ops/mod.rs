//! Renaming and cleanup passes applied to a nested [`Structure`](crate::Structure).
//!
//! [`rename_residues`] chains the charge-state, histidine, disulfide and terminus passes
//! in their required order; [`clean_structure`] prepares the result for output. Each pass
//! is also exposed on its own.

mod charge;
mod cleanup;
mod disulfide;
mod error;
mod histidine;
mod rename;
mod termini;

pub use charge::rename_charge_states;
pub use cleanup::{clean_structure, renumber_atoms};
pub use disulfide::{DisulfideCutoffs, rename_disulfides};
pub use error::Error;
pub use histidine::assign_histidine_tautomers;
pub use rename::{RenameConfig, RenameReport, rename_residues};
pub use termini::{rename_modeled_termini, rename_termini};

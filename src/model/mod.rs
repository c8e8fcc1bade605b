//! Core data structures modeling a labeled protein structure.
//!
//! Records, residues, and the single-chain structure defined here are produced by the
//! IO readers, rewritten by the renaming passes in `ops`, and flattened back into text
//! by the PDB writer.

pub mod record;
pub mod residue;
pub mod structure;
pub mod types;

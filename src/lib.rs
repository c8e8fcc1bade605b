//! # amber-rename
//!
//! **amber-rename** converts protein structures labeled by the MCCE protonation engine into
//! PDB files whose residue and atom names match the AMBER force field, either as used by
//! AMBER itself and the ffamber GROMACS ports or as shipped with GROMACS (`gAMBER`).
//!
//! ## Features
//!
//! - **Typed records** – Fixed-column `ATOM`/`HETATM` lines become `AtomRecord` values with validated coordinates, so malformed input fails with a line number instead of producing garbage.
//! - **Residue nesting** – `Structure::nest` groups records into residues and splits residues that MCCE merged by stripping insertion codes.
//! - **Rule-driven renaming** – Charge states, histidine tautomers, disulfide bridges, and chain termini are renamed by passes under `ops`, with charge-state tables embedded as TOML per `Terminology`.
//! - **Output cleanup** – Element symbols, occupancies, and numbering are normalized so the written file is accepted by MD setup tools.

mod db;
mod model;

pub mod io;
pub mod ops;

pub use model::record::{AtomRecord, ResidueKey};
pub use model::residue::Residue;
pub use model::structure::Structure;
pub use model::types::{ParseTerminologyError, Point, ProtonationFlag, RecordKind, Terminology};

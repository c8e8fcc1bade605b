//! Deserializable representation of the renaming rule tables shipped in `rules/`.
//!
//! All structs deny unknown fields so that a typo in a rule file fails at load time
//! instead of silently dropping a rule.

use crate::model::types::{ProtonationFlag, Terminology};
use serde::Deserialize;

/// Top-level rule document for one terminology.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct RuleSetFile {
    pub info: RuleSetInfo,
    /// Charge-state renames keyed by residue name and MCCE flag.
    #[serde(default)]
    pub charge_states: Vec<ChargeStateRule>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct RuleSetInfo {
    /// Terminology the file describes; must match the slot it is loaded into.
    pub terminology: Terminology,
    /// Residue name given to disulfide-bonded cysteines.
    pub disulfide: String,
}

/// One row of the charge-state table.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ChargeStateRule {
    /// Three-letter residue name as written by MCCE.
    pub residue: String,
    pub flag: ProtonationFlag,
    /// Residue name after renaming.
    pub target: String,
    /// Atom renames applied together with the residue rename.
    #[serde(default)]
    pub atoms: Vec<AtomRename>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct AtomRename {
    pub from: String,
    pub to: String,
}

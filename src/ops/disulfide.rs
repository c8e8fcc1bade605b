//! Disulfide bridge detection between cysteine sulfur atoms.
//!
//! Every pair of `CYS`/`CYD` residues is compared by the distance between their `SG`
//! atoms. Residues of a pair whose distance falls inside [`DisulfideCutoffs`] are
//! renamed to the bridged cysteine name of the active terminology.

use crate::db;
use crate::model::{
    structure::Structure,
    types::{Point, Terminology},
};
use crate::ops::error::Error;
use std::collections::BTreeSet;

const SULFUR: &str = "SG";

/// Inclusive `SG`–`SG` distance window, in ångströms, that identifies a disulfide bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisulfideCutoffs {
    pub min: f64,
    pub max: f64,
}

impl Default for DisulfideCutoffs {
    fn default() -> Self {
        Self { min: 1.8, max: 2.2 }
    }
}

impl DisulfideCutoffs {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` when `distance` lies within the window, bounds included.
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min && distance <= self.max
    }
}

/// Renames bridged cysteines to `CYS2` (AMBER) or `CYX` (gAMBER).
///
/// Cysteines already labeled `CYD` by MCCE are re-examined with the same distance test
/// and are left alone when no partner is in range.
///
/// # Arguments
///
/// * `structure` - Nested structure modified in place.
/// * `terminology` - Naming convention providing the bridged residue name.
/// * `cutoffs` - Distance window accepted as a bond.
///
/// # Returns
///
/// The number of residues renamed.
///
/// # Errors
///
/// Returns [`Error::AtomNotFound`] when a cysteine lacks its `SG` atom.
pub fn rename_disulfides(
    structure: &mut Structure,
    terminology: Terminology,
    cutoffs: DisulfideCutoffs,
) -> Result<usize, Error> {
    let sulfurs = collect_sulfurs(structure)?;

    let mut bridged: BTreeSet<usize> = BTreeSet::new();
    for (i, (idx_i, pos_i)) in sulfurs.iter().enumerate() {
        for (idx_j, pos_j) in &sulfurs[i + 1..] {
            let distance = nalgebra::distance(pos_i, pos_j);
            if cutoffs.contains(distance) {
                log::debug!(
                    "Disulfide bond between residues #{} and #{} ({distance:.3} Å)",
                    idx_i + 1,
                    idx_j + 1
                );
                bridged.insert(*idx_i);
                bridged.insert(*idx_j);
            }
        }
    }

    if bridged.is_empty() {
        return Ok(0);
    }

    let bridged_name = db::rules(terminology).disulfide_name();
    for &index in &bridged {
        if let Some(residue) = structure.residue_mut(index) {
            residue.rename(bridged_name);
        }
    }

    log::info!("Renamed {} bridged cysteine(s) to {bridged_name}", bridged.len());
    Ok(bridged.len())
}

fn is_cysteine(name: &str) -> bool {
    matches!(name, "CYS" | "CYD")
}

fn collect_sulfurs(structure: &Structure) -> Result<Vec<(usize, Point)>, Error> {
    structure
        .iter_residues()
        .enumerate()
        .filter(|(_, residue)| is_cysteine(residue.name()))
        .map(|(index, residue)| {
            residue
                .record(SULFUR)
                .map(|sg| (index, sg.pos))
                .ok_or_else(|| Error::atom_not_found(residue.name(), residue.res_seq(), SULFUR))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{record::AtomRecord, residue::Residue};

    fn residue(name: &str, seq: i32, sg: Option<Point>) -> Residue {
        let mut residue =
            Residue::new(AtomRecord::new("CA", name, seq, Point::new(0.0, 0.0, -5.0)));
        if let Some(pos) = sg {
            residue.push(AtomRecord::new(SULFUR, name, seq, pos));
        }
        residue
    }

    fn cys_ala_cys(distance: f64, second: &str) -> Structure {
        vec![
            residue("CYS", 1, Some(Point::origin())),
            residue("ALA", 2, None),
            residue(second, 3, Some(Point::new(distance, 0.0, 0.0))),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn bridged_pair_is_renamed_under_amber() {
        let mut structure = cys_ala_cys(2.0, "CYS");

        let renamed =
            rename_disulfides(&mut structure, Terminology::Amber, DisulfideCutoffs::default())
                .unwrap();

        assert_eq!(renamed, 2);
        assert_eq!(structure.residue_names(), vec!["CYS2", "ALA", "CYS2"]);
    }

    #[test]
    fn bridged_pair_is_renamed_under_gamber() {
        let mut structure = cys_ala_cys(2.0, "CYD");

        rename_disulfides(
            &mut structure,
            Terminology::GromacsAmber,
            DisulfideCutoffs::default(),
        )
        .unwrap();

        assert_eq!(structure.residue_names(), vec!["CYX", "ALA", "CYX"]);
    }

    #[test]
    fn cutoff_bounds_are_inclusive() {
        let cutoffs = DisulfideCutoffs::default();
        for distance in [cutoffs.min, cutoffs.max] {
            let mut structure = cys_ala_cys(distance, "CYS");
            assert_eq!(
                rename_disulfides(&mut structure, Terminology::Amber, cutoffs).unwrap(),
                2,
                "distance {distance} should bond"
            );
        }
    }

    #[test]
    fn distances_just_outside_the_window_are_ignored() {
        let cutoffs = DisulfideCutoffs::default();
        for distance in [cutoffs.min - 1e-6, cutoffs.max + 1e-6] {
            let mut structure = cys_ala_cys(distance, "CYS");
            assert_eq!(
                rename_disulfides(&mut structure, Terminology::Amber, cutoffs).unwrap(),
                0
            );
            assert_eq!(structure.residue_names(), vec!["CYS", "ALA", "CYS"]);
        }
    }

    #[test]
    fn custom_cutoffs_change_the_window() {
        let mut structure = cys_ala_cys(2.5, "CYS");

        let renamed = rename_disulfides(
            &mut structure,
            Terminology::Amber,
            DisulfideCutoffs::new(2.0, 3.0),
        )
        .unwrap();

        assert_eq!(renamed, 2);
    }

    #[test]
    fn cysteine_without_sulfur_is_an_error() {
        let mut structure: Structure = vec![
            residue("CYS", 1, Some(Point::origin())),
            residue("CYS", 4, None),
        ]
        .into_iter()
        .collect();

        let err =
            rename_disulfides(&mut structure, Terminology::Amber, DisulfideCutoffs::default())
                .unwrap_err();

        assert_eq!(err, Error::atom_not_found("CYS", 4, "SG"));
    }

    #[test]
    fn renamed_cysteines_are_not_matched_again() {
        let mut structure = cys_ala_cys(2.0, "CYS");
        rename_disulfides(&mut structure, Terminology::Amber, DisulfideCutoffs::default()).unwrap();

        let second =
            rename_disulfides(&mut structure, Terminology::Amber, DisulfideCutoffs::default())
                .unwrap();

        assert_eq!(second, 0);
    }
}

//! Charge-state renaming driven by MCCE protonation flags.
//!
//! Each residue's name together with the flag on its last record is looked up in the
//! embedded rule table of the selected [`Terminology`]. Matching residues receive the
//! target name and any hydrogen renames bundled with the rule.

use crate::db;
use crate::model::{structure::Structure, types::Terminology};

/// Renames residues according to their protonation state.
///
/// Residues without a flag, or whose name and flag have no row in the rule table, are
/// left untouched. Running the pass twice yields the same structure as running it once.
///
/// # Arguments
///
/// * `structure` - Nested structure whose residues are renamed in place.
/// * `terminology` - Naming convention selecting the rule table.
///
/// # Returns
///
/// The number of residues that matched a charge-state rule.
pub fn rename_charge_states(structure: &mut Structure, terminology: Terminology) -> usize {
    let rules = db::rules(terminology);
    let mut matched = 0;

    for residue in structure.iter_residues_mut() {
        let Some(flag) = residue.flag() else {
            continue;
        };
        let Some(rule) = rules.charge_rule(residue.name(), flag) else {
            continue;
        };

        log::debug!(
            "Charge state {}{} ({}) -> {}",
            residue.name(),
            flag,
            residue.res_seq(),
            rule.target()
        );

        residue.rename(rule.target());
        for (from, to) in rule.atom_renames() {
            residue.rename_atom(from, to);
        }
        matched += 1;
    }

    log::info!(
        "Applied {matched} charge-state rename(s) using {} naming",
        rules.terminology()
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        record::AtomRecord,
        residue::Residue,
        types::{Point, ProtonationFlag},
    };

    fn flagged_residue(name: &str, seq: i32, atoms: &[&str], flag: ProtonationFlag) -> Residue {
        let mut records = atoms
            .iter()
            .map(|atom| AtomRecord::new(atom, name, seq, Point::origin()).with_flag(flag));
        let mut residue = Residue::new(records.next().expect("at least one atom"));
        for record in records {
            residue.push(record);
        }
        residue
    }

    fn structure(residues: Vec<Residue>) -> Structure {
        residues.into_iter().collect()
    }

    #[test]
    fn amber_names_follow_flag_of_each_residue() {
        use ProtonationFlag::*;
        let mut structure = structure(vec![
            flagged_residue("HIS", 1, &["CA", "HD1", "HE2"], Positive),
            flagged_residue("LYS", 2, &["CA", "NZ"], Neutral),
            flagged_residue("LYS", 3, &["CA", "NZ"], Positive),
            flagged_residue("CYS", 4, &["CA", "SG"], Neutral),
            flagged_residue("CYS", 5, &["CA", "SG"], Negative),
        ]);

        let matched = rename_charge_states(&mut structure, Terminology::Amber);

        assert_eq!(matched, 5);
        assert_eq!(
            structure.residue_names(),
            vec!["HIP", "LYN", "LYP", "CYN", "CYM"]
        );
    }

    #[test]
    fn gamber_keeps_charged_lysine_and_neutral_cysteine_names() {
        use ProtonationFlag::*;
        let mut structure = structure(vec![
            flagged_residue("LYS", 1, &["CA", "NZ"], Positive),
            flagged_residue("CYS", 2, &["CA", "SG"], Neutral),
            flagged_residue("CYS", 3, &["CA", "SG"], Negative),
        ]);

        rename_charge_states(&mut structure, Terminology::GromacsAmber);

        assert_eq!(structure.residue_names(), vec!["LYS", "CYS", "CYM"]);
    }

    #[test]
    fn protonated_acids_move_their_hydrogen() {
        use ProtonationFlag::*;
        let mut structure = structure(vec![
            flagged_residue("ASP", 1, &["CG", "OD2", "HD1"], Neutral),
            flagged_residue("GLU", 2, &["CD", "OE2", "HE1"], Neutral),
        ]);

        rename_charge_states(&mut structure, Terminology::Amber);

        let ash = structure.residue(0).unwrap();
        assert_eq!(ash.name(), "ASH");
        assert!(ash.has_atom("HD2"));
        assert!(!ash.has_atom("HD1"));

        let glh = structure.residue(1).unwrap();
        assert_eq!(glh.name(), "GLH");
        assert!(glh.has_atom("HE2"));
        assert!(!glh.has_atom("HE1"));
    }

    #[test]
    fn flag_is_read_from_last_record() {
        let mut residue = Residue::new(
            AtomRecord::new("CA", "LYS", 1, Point::origin()).with_flag(ProtonationFlag::Neutral),
        );
        residue.push(
            AtomRecord::new("NZ", "LYS", 1, Point::origin()).with_flag(ProtonationFlag::Positive),
        );
        let mut structure = structure(vec![residue]);

        rename_charge_states(&mut structure, Terminology::Amber);

        assert_eq!(structure.residue_names(), vec!["LYP"]);
    }

    #[test]
    fn unmatched_and_unflagged_residues_are_untouched() {
        use ProtonationFlag::*;
        let mut unflagged = structure(vec![flagged_residue("LYS", 1, &["CA"], Positive)]);
        for record in unflagged.iter_records_mut() {
            record.flag = None;
        }
        rename_charge_states(&mut unflagged, Terminology::Amber);
        assert_eq!(unflagged.residue_names(), vec!["LYS"]);

        let mut other = structure(vec![
            flagged_residue("TYR", 1, &["OH"], Negative),
            flagged_residue("ASP", 2, &["CG"], Negative),
            flagged_residue("ALA", 3, &["CA"], Neutral),
        ]);
        let matched = rename_charge_states(&mut other, Terminology::Amber);
        assert_eq!(matched, 0);
        assert_eq!(other.residue_names(), vec!["TYR", "ASP", "ALA"]);
    }

    #[test]
    fn renaming_is_idempotent() {
        use ProtonationFlag::*;
        for terminology in [Terminology::Amber, Terminology::GromacsAmber] {
            let mut once = structure(vec![
                flagged_residue("HIS", 1, &["CA", "HD1", "HE2"], Positive),
                flagged_residue("LYS", 2, &["CA", "NZ"], Positive),
                flagged_residue("CYS", 3, &["CA", "SG"], Neutral),
                flagged_residue("ASP", 4, &["CG", "HD1"], Neutral),
                flagged_residue("GLU", 5, &["CD", "HE1"], Neutral),
            ]);
            rename_charge_states(&mut once, terminology);

            let mut twice = once.clone();
            rename_charge_states(&mut twice, terminology);

            assert_eq!(once, twice);
        }
    }
}

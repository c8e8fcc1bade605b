use crate::model::structure::Structure;
use crate::ops::error::Error;

const HIS: &str = "HIS";

/// Assigns a tautomer name to every residue still called `HIS`.
///
/// The name is decided by which ring hydrogens are present: both `HD1` and `HE2`
/// give `HIP`, `HE2` alone gives `HIE`, `HD1` alone gives `HID`. A histidine with
/// neither hydrogen cannot be classified and aborts the pass.
pub fn assign_histidine_tautomers(structure: &mut Structure) -> Result<usize, Error> {
    let mut assigned = 0;

    for residue in structure.iter_residues_mut().filter(|r| r.name() == HIS) {
        let tautomer = match (residue.has_atom("HD1"), residue.has_atom("HE2")) {
            (true, true) => "HIP",
            (false, true) => "HIE",
            (true, false) => "HID",
            (false, false) => {
                return Err(Error::unprotonated_histidine(
                    residue.name(),
                    residue.res_seq(),
                ));
            }
        };

        log::debug!("Histidine {} -> {}", residue.res_seq(), tautomer);
        residue.rename(tautomer);
        assigned += 1;
    }

    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{record::AtomRecord, residue::Residue, types::Point};

    fn histidine(atoms: &[&str]) -> Structure {
        let mut residue = Residue::new(AtomRecord::new("CA", HIS, 7, Point::origin()));
        for atom in atoms {
            residue.push(AtomRecord::new(atom, HIS, 7, Point::origin()));
        }
        std::iter::once(residue).collect()
    }

    fn assigned_name(atoms: &[&str]) -> String {
        let mut structure = histidine(atoms);
        assign_histidine_tautomers(&mut structure).expect("histidine is protonated");
        structure.residue(0).unwrap().name().to_string()
    }

    #[test]
    fn ring_hydrogens_select_tautomer() {
        assert_eq!(assigned_name(&["HD1"]), "HID");
        assert_eq!(assigned_name(&["HE2"]), "HIE");
        assert_eq!(assigned_name(&["HD1", "HE2"]), "HIP");
    }

    #[test]
    fn histidine_without_ring_hydrogens_is_an_error() {
        let mut structure = histidine(&["NE2", "ND1"]);

        let err = assign_histidine_tautomers(&mut structure).unwrap_err();

        assert_eq!(err, Error::unprotonated_histidine("HIS", 7));
    }

    #[test]
    fn already_assigned_histidines_are_skipped() {
        let mut structure = histidine(&["HE2"]);
        assign_histidine_tautomers(&mut structure).unwrap();

        let second = assign_histidine_tautomers(&mut structure).unwrap();

        assert_eq!(second, 0);
        assert_eq!(structure.residue_names(), vec!["HIE"]);
    }

    #[test]
    fn other_residues_are_ignored() {
        let mut residue = Residue::new(AtomRecord::new("CA", "HIP", 1, Point::origin()));
        residue.push(AtomRecord::new("CB", "HIP", 1, Point::origin()));
        let mut structure: Structure = std::iter::once(residue).collect();

        assert_eq!(assign_histidine_tautomers(&mut structure).unwrap(), 0);
    }
}

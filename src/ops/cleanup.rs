//! Final normalization applied before a structure is written.
//!
//! Cleanup discards the MCCE-specific trailing columns, derives element symbols from
//! atom names, merges renamed terminus markers into their neighbours, and renumbers
//! residues and atoms from one.

use crate::model::{record::AtomRecord, structure::Structure};
use crate::ops::error::Error;
use smol_str::SmolStr;

const DEFAULT_OCCUPANCY: f64 = 1.0;
const DEFAULT_B_FACTOR: f64 = 0.0;

/// Normalizes every record, re-nests residues and renumbers the structure.
///
/// After this pass every record has occupancy `1.00`, B-factor `0.00`, a single-letter
/// element symbol, no protonation flag, and blank chain and insertion code. Residue
/// numbers run `1..=N` and atom serials `1..=M` in file order.
///
/// # Errors
///
/// Returns [`Error::ElementUndetermined`] when an atom name has no letter to derive an
/// element from.
pub fn clean_structure(structure: &mut Structure) -> Result<(), Error> {
    for record in structure.iter_records_mut() {
        normalize_record(record)?;
    }

    let mut nested = Structure::nest(std::mem::take(structure).unnest());

    for (idx, residue) in nested.iter_residues_mut().enumerate() {
        let res_seq = idx as i32 + 1;
        for record in residue.iter_records_mut() {
            record.chain_id = None;
            record.i_code = None;
            record.res_seq = res_seq;
        }
    }
    renumber_atoms(&mut nested);

    log::info!(
        "Cleaned structure: {} residue(s), {} atom(s)",
        nested.residue_count(),
        nested.atom_count()
    );
    *structure = nested;
    Ok(())
}

/// Rewrites atom serials to `1..=M` in file order, leaving every other field untouched.
pub fn renumber_atoms(structure: &mut Structure) {
    for (idx, record) in structure.iter_records_mut().enumerate() {
        record.serial = idx as u32 + 1;
    }
}

fn normalize_record(record: &mut AtomRecord) -> Result<(), Error> {
    let element = record
        .element_from_name()
        .ok_or_else(|| Error::element_undetermined(record.name.as_str(), record.serial))?;

    record.element = SmolStr::from(element.to_string());
    record.occupancy = DEFAULT_OCCUPANCY;
    record.b_factor = DEFAULT_B_FACTOR;
    record.flag = None;
    Ok(())
}

//! Terminus renaming for MCCE-labeled and externally modeled chains.
//!
//! MCCE splits each chain end into a separate marker residue (`NTR`/`NTG` before the
//! first residue, `CTR` after the last). Both the marker and its neighbour take the
//! terminal name `N<res>`/`C<res>` so that cleanup can merge them back into one residue.

use crate::model::{residue::Residue, structure::Structure, types::RecordKind};
use crate::ops::error::Error;

const C_TERMINUS_MARKER: &str = "CTR";

fn is_n_terminus_marker(name: &str) -> bool {
    matches!(name, "NTR" | "NTG")
}

/// Renames every `NTR`/`NTG` … `CTR` marker pair and the residues they cap.
///
/// Markers are paired in discovery order: the k-th N-terminal marker with the k-th
/// C-terminal marker. The capped residue names are taken from the residue after the N
/// marker and the residue before the C marker, keeping only their first three letters.
///
/// # Errors
///
/// * [`Error::TerminusCountMismatch`] when N- and C-terminal marker counts differ.
/// * [`Error::DanglingTerminus`] when a marker has no neighbouring residue.
pub fn rename_termini(structure: &mut Structure) -> Result<usize, Error> {
    let n_markers = marker_indices(structure, is_n_terminus_marker);
    let c_markers = marker_indices(structure, |name| name == C_TERMINUS_MARKER);

    if n_markers.len() != c_markers.len() {
        return Err(Error::TerminusCountMismatch {
            n_terminal: n_markers.len(),
            c_terminal: c_markers.len(),
        });
    }

    for (&n_idx, &c_idx) in n_markers.iter().zip(&c_markers) {
        let n_neighbour = n_idx + 1;
        let n_stem = residue_stem(neighbour(structure, n_idx, Some(n_neighbour))?);

        let c_neighbour = c_idx.checked_sub(1);
        let c_stem = residue_stem(neighbour(structure, c_idx, c_neighbour)?);
        let c_neighbour = c_idx - 1;

        let n_name = n_terminal_name(&n_stem);
        let c_name = c_terminal_name(&c_stem);
        log::debug!(
            "Terminus pair #{} / #{}: {} -> {n_name}, {} -> {c_name}",
            n_idx + 1,
            c_idx + 1,
            n_stem,
            c_stem
        );

        for idx in [n_idx, n_neighbour] {
            if let Some(residue) = structure.residue_mut(idx) {
                rename_n_terminal(residue, &n_name, &n_stem);
            }
        }
        for idx in [c_neighbour, c_idx] {
            if let Some(residue) = structure.residue_mut(idx) {
                rename_c_terminal(residue, &c_name, &c_stem);
            }
        }
    }

    log::info!("Renamed {} terminus pair(s)", n_markers.len());
    Ok(n_markers.len())
}

/// Renames the ends of a chain built by an external modeller, which carries no markers.
///
/// The first residue made of `ATOM` records is the N terminus and the last one is the
/// C terminus. Lysine is read as `LYP` at either end. Afterwards every remaining `LYS`
/// becomes `LYP` and every `HIS` becomes `HIP`.
///
/// # Errors
///
/// Returns [`Error::NoPolymerResidues`] when no residue consists of `ATOM` records.
pub fn rename_modeled_termini(structure: &mut Structure) -> Result<(), Error> {
    let is_polymer = |residue: &Residue| residue.kind() == RecordKind::Atom;
    let n_idx = structure
        .iter_residues()
        .position(is_polymer)
        .ok_or(Error::NoPolymerResidues)?;
    let c_idx = structure
        .iter_residues()
        .rposition(is_polymer)
        .ok_or(Error::NoPolymerResidues)?;

    let n_stem = modeled_stem(&structure.residues()[n_idx]);
    let c_stem = modeled_stem(&structure.residues()[c_idx]);
    let n_name = n_terminal_name(&n_stem);
    let c_name = c_terminal_name(&c_stem);
    log::debug!("Modeled termini: #{} -> {n_name}, #{} -> {c_name}", n_idx + 1, c_idx + 1);

    if let Some(residue) = structure.residue_mut(n_idx) {
        rename_n_terminal(residue, &n_name, &n_stem);
    }
    if let Some(residue) = structure.residue_mut(c_idx) {
        rename_c_terminal(residue, &c_name, &c_stem);
    }

    for residue in structure.iter_residues_mut() {
        match residue.name() {
            "LYS" => residue.rename("LYP"),
            "HIS" => residue.rename("HIP"),
            _ => {}
        }
    }

    Ok(())
}

fn marker_indices(structure: &Structure, is_marker: impl Fn(&str) -> bool) -> Vec<usize> {
    structure
        .iter_residues()
        .enumerate()
        .filter(|(_, residue)| is_marker(residue.name()))
        .map(|(idx, _)| idx)
        .collect()
}

fn neighbour(
    structure: &Structure,
    marker_idx: usize,
    neighbour_idx: Option<usize>,
) -> Result<&Residue, Error> {
    neighbour_idx
        .and_then(|idx| structure.residue(idx))
        .ok_or_else(|| {
            let marker = &structure.residues()[marker_idx];
            Error::dangling_terminus(marker.name(), marker.res_seq())
        })
}

fn residue_stem(residue: &Residue) -> String {
    residue.name().chars().take(3).collect()
}

fn modeled_stem(residue: &Residue) -> String {
    match residue_stem(residue).as_str() {
        "LYS" => "LYP".to_string(),
        stem => stem.to_string(),
    }
}

fn n_terminal_name(stem: &str) -> String {
    match stem {
        "LYS" => "NLYP".to_string(),
        _ => format!("N{stem}"),
    }
}

fn c_terminal_name(stem: &str) -> String {
    match stem {
        "LYS" | "LYN" => "CLYP".to_string(),
        _ => format!("C{stem}"),
    }
}

fn rename_n_terminal(residue: &mut Residue, name: &str, stem: &str) {
    residue.rename(name);
    if stem == "ILE" {
        fix_isoleucine_atoms(residue);
    }
}

fn rename_c_terminal(residue: &mut Residue, name: &str, stem: &str) {
    residue.rename(name);
    residue.rename_atom("O", "OC1");
    residue.rename_atom("OXT", "OC2");
    if stem == "ILE" {
        fix_isoleucine_atoms(residue);
    }
}

/// Terminal isoleucine templates name the delta carbon `CD` and its hydrogens `HD1..3`.
fn fix_isoleucine_atoms(residue: &mut Residue) {
    residue.rename_atom("CD1", "CD");
    residue.rename_atom("1HD1", "HD1");
    residue.rename_atom("2HD1", "HD2");
    residue.rename_atom("3HD1", "HD3");
}

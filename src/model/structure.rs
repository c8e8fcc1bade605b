use super::record::AtomRecord;
use super::residue::Residue;
use std::collections::HashSet;
use std::fmt;

/// Ordered residues of a single protein chain.
///
/// Multi-chain input is not modeled: residues from different chains are simply kept in
/// file order, and the cleanup pass blanks every chain identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    residues: Vec<Residue>,
}

impl Structure {
    /// Groups a flat record sequence into residues.
    ///
    /// Consecutive records sharing a [`ResidueKey`](super::record::ResidueKey) form one
    /// residue. MCCE strips insertion codes, so two neighbouring residues of the same
    /// type can share a key; a repeated atom name therefore starts a new residue. Capped
    /// N-terminal residues legitimately repeat atom names and are never split.
    pub fn nest(records: impl IntoIterator<Item = AtomRecord>) -> Self {
        let mut residues = Vec::new();
        let mut current: Option<Residue> = None;
        let mut seen_atoms: HashSet<String> = HashSet::new();

        for record in records {
            match current.as_mut() {
                Some(residue) if residue.key() == record.residue_key() => {
                    if seen_atoms.insert(record.name.to_string())
                        || is_n_terminal_variant(&record.res_name)
                    {
                        residue.push(record);
                        continue;
                    }
                    log::debug!(
                        "Duplicate atom '{}' in {} {}; starting a new residue",
                        record.name,
                        record.res_name,
                        record.res_seq
                    );
                }
                _ => {}
            }

            if let Some(finished) = current.take() {
                residues.push(finished);
            }
            seen_atoms.clear();
            seen_atoms.insert(record.name.to_string());
            current = Some(Residue::new(record));
        }

        if let Some(finished) = current {
            residues.push(finished);
        }

        Self { residues }
    }

    /// Flattens the residues back into records, preserving residue and atom order.
    pub fn unnest(self) -> Vec<AtomRecord> {
        self.residues
            .into_iter()
            .flat_map(Residue::into_records)
            .collect()
    }

    pub fn residue(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    pub fn residue_mut(&mut self, index: usize) -> Option<&mut Residue> {
        self.residues.get_mut(index)
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn atom_count(&self) -> usize {
        self.residues.iter().map(Residue::record_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn iter_residues(&self) -> std::slice::Iter<'_, Residue> {
        self.residues.iter()
    }

    pub fn iter_residues_mut(&mut self) -> std::slice::IterMut<'_, Residue> {
        self.residues.iter_mut()
    }

    pub fn iter_records(&self) -> impl Iterator<Item = &AtomRecord> {
        self.residues.iter().flat_map(|r| r.iter_records())
    }

    pub fn iter_records_mut(&mut self) -> impl Iterator<Item = &mut AtomRecord> {
        self.residues.iter_mut().flat_map(|r| r.iter_records_mut())
    }

    /// Residue names in order, handy for diagnostics and assertions.
    pub fn residue_names(&self) -> Vec<&str> {
        self.residues.iter().map(Residue::name).collect()
    }
}

/// Whether a residue name marks an N-terminal variant (`NTR`, `NTG`, `NALA`, ...).
pub fn is_n_terminal_variant(res_name: &str) -> bool {
    res_name.starts_with('N')
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Structure {{ residues: {}, atoms: {} }}",
            self.residue_count(),
            self.atom_count()
        )
    }
}

impl FromIterator<Residue> for Structure {
    fn from_iter<T: IntoIterator<Item = Residue>>(iter: T) -> Self {
        Self {
            residues: iter.into_iter().collect(),
        }
    }
}

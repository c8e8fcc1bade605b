use super::record::{AtomRecord, ResidueKey};
use super::types::{ProtonationFlag, RecordKind};
use std::fmt;

/// Ordered group of atom records sharing one residue identifier.
///
/// A residue always holds at least one record; its name and number are read from the
/// first record, its protonation flag from the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    records: Vec<AtomRecord>,
}

impl Residue {
    pub fn new(first: AtomRecord) -> Self {
        Self {
            records: vec![first],
        }
    }

    pub fn push(&mut self, record: AtomRecord) {
        self.records.push(record);
    }

    pub fn name(&self) -> &str {
        &self.first().res_name
    }

    pub fn res_seq(&self) -> i32 {
        self.first().res_seq
    }

    pub fn kind(&self) -> RecordKind {
        self.first().kind
    }

    pub fn key(&self) -> ResidueKey {
        self.first().residue_key()
    }

    pub fn flag(&self) -> Option<ProtonationFlag> {
        self.last().flag
    }

    /// Assigns a new residue name to every record.
    pub fn rename(&mut self, name: &str) {
        for record in &mut self.records {
            record.res_name = name.into();
        }
    }

    /// Renames every atom called `from` to `to`, returning how many were changed.
    pub fn rename_atom(&mut self, from: &str, to: &str) -> usize {
        let mut changed = 0;
        for record in self.records.iter_mut().filter(|r| r.name == from) {
            record.name = to.into();
            changed += 1;
        }
        changed
    }

    pub fn record(&self, name: &str) -> Option<&AtomRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn has_atom(&self, name: &str) -> bool {
        self.record(name).is_some()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn iter_records(&self) -> std::slice::Iter<'_, AtomRecord> {
        self.records.iter()
    }

    pub fn iter_records_mut(&mut self) -> std::slice::IterMut<'_, AtomRecord> {
        self.records.iter_mut()
    }

    pub fn into_records(self) -> Vec<AtomRecord> {
        self.records
    }

    fn first(&self) -> &AtomRecord {
        &self.records[0]
    }

    fn last(&self) -> &AtomRecord {
        &self.records[self.records.len() - 1]
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Residue {{ seq: {}, name: \"{}\", records: {} }}",
            self.res_seq(),
            self.name(),
            self.record_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Point;

    fn asp() -> Residue {
        let mut residue = Residue::new(AtomRecord::new("CG", "ASP", 12, Point::origin()));
        residue.push(AtomRecord::new("OD1", "ASP", 12, Point::origin()));
        residue.push(
            AtomRecord::new("HD1", "ASP", 12, Point::origin()).with_flag(ProtonationFlag::Neutral),
        );
        residue
    }

    #[test]
    fn identity_comes_from_first_record_and_flag_from_last() {
        let residue = asp();

        assert_eq!(residue.name(), "ASP");
        assert_eq!(residue.res_seq(), 12);
        assert_eq!(residue.kind(), RecordKind::Atom);
        assert_eq!(residue.flag(), Some(ProtonationFlag::Neutral));
    }

    #[test]
    fn rename_updates_every_record() {
        let mut residue = asp();
        residue.rename("ASH");

        assert!(residue.iter_records().all(|r| r.res_name == "ASH"));
    }

    #[test]
    fn rename_atom_reports_number_of_changes() {
        let mut residue = asp();

        assert_eq!(residue.rename_atom("HD1", "HD2"), 1);
        assert!(residue.has_atom("HD2"));
        assert!(!residue.has_atom("HD1"));
        assert_eq!(residue.rename_atom("HD1", "HD2"), 0);
    }

    #[test]
    fn display_summarizes_residue() {
        assert_eq!(
            asp().to_string(),
            "Residue { seq: 12, name: \"ASP\", records: 3 }"
        );
    }
}

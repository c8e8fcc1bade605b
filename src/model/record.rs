//! Typed representation of a single fixed-column atom line.
//!
//! Every field that the renaming passes touch (atom name, residue name, residue
//! identifier, coordinates) lives in its own slot, so a rename is a field assignment
//! rather than a substring splice. IO readers build records and the writer turns them
//! back into fixed-width text.

use super::types::{Point, ProtonationFlag, RecordKind};
use smol_str::SmolStr;
use std::fmt;

/// One atom as read from a (possibly MCCE-labeled) PDB file.
///
/// Names are stored trimmed. Column placement is the writer's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// `ATOM` or `HETATM`.
    pub kind: RecordKind,
    /// Atom serial number (columns 7-11).
    pub serial: u32,
    /// Atom name such as `CA` or `1HD1` (columns 13-16).
    pub name: SmolStr,
    /// Alternate location indicator (column 17).
    pub alt_loc: Option<char>,
    /// Residue name, up to four characters so that `CYS2` or `NLYP` fit (columns 18-21).
    pub res_name: SmolStr,
    /// Chain identifier (column 22).
    pub chain_id: Option<char>,
    /// Residue sequence number (columns 23-26).
    pub res_seq: i32,
    /// Insertion code (column 27).
    pub i_code: Option<char>,
    /// Cartesian coordinates in ångströms (columns 31-54).
    pub pos: Point,
    pub occupancy: f64,
    pub b_factor: f64,
    /// Element symbol (columns 77-78), empty when unknown.
    pub element: SmolStr,
    /// Protonation label appended by MCCE, if any.
    pub flag: Option<ProtonationFlag>,
}

/// Key that decides whether two consecutive records belong to the same residue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueKey {
    pub res_name: SmolStr,
    pub chain_id: Option<char>,
    pub res_seq: i32,
    pub i_code: Option<char>,
}

impl AtomRecord {
    /// Creates an `ATOM` record with default metadata.
    ///
    /// Intended for programmatic construction; readers fill every field explicitly.
    pub fn new(name: &str, res_name: &str, res_seq: i32, pos: Point) -> Self {
        Self {
            kind: RecordKind::Atom,
            serial: 0,
            name: SmolStr::new(name),
            alt_loc: None,
            res_name: SmolStr::new(res_name),
            chain_id: None,
            res_seq,
            i_code: None,
            pos,
            occupancy: 1.0,
            b_factor: 0.0,
            element: SmolStr::default(),
            flag: None,
        }
    }

    /// Builder-style helper attaching a protonation flag.
    pub fn with_flag(mut self, flag: ProtonationFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Returns the identifier used to group records into residues.
    pub fn residue_key(&self) -> ResidueKey {
        ResidueKey {
            res_name: self.res_name.clone(),
            chain_id: self.chain_id,
            res_seq: self.res_seq,
            i_code: self.i_code,
        }
    }

    /// Euclidean distance to another record in ångströms.
    pub fn distance(&self, other: &AtomRecord) -> f64 {
        nalgebra::distance(&self.pos, &other.pos)
    }

    /// Derives an element symbol from the atom name.
    ///
    /// Digits and whitespace are stripped from both ends and the first remaining
    /// character is taken. This misreads two-letter symbols such as `CL` or `FE`.
    pub fn element_from_name(&self) -> Option<char> {
        self.name
            .trim_matches(|c: char| c.is_ascii_digit() || c.is_whitespace())
            .chars()
            .next()
    }
}

impl fmt::Display for AtomRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}{} [{:.3}, {:.3}, {:.3}]",
            self.kind,
            self.serial,
            self.name,
            self.res_name,
            self.res_seq,
            self.pos.x,
            self.pos.y,
            self.pos.z
        )
    }
}

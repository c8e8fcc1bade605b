use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("histidine '{res_name}' ({res_seq}) carries neither HD1 nor HE2")]
    UnprotonatedHistidine { res_name: String, res_seq: i32 },

    #[error(
        "terminus markers are unbalanced: {n_terminal} N-terminal vs {c_terminal} C-terminal"
    )]
    TerminusCountMismatch { n_terminal: usize, c_terminal: usize },

    #[error("terminus marker '{marker}' ({res_seq}) has no neighbouring residue")]
    DanglingTerminus { marker: String, res_seq: i32 },

    #[error("residue '{res_name}' ({res_seq}) is missing atom '{atom_name}'")]
    AtomNotFound {
        res_name: String,
        res_seq: i32,
        atom_name: String,
    },

    #[error("cannot determine element for atom '{atom_name}' (serial {serial})")]
    ElementUndetermined { atom_name: String, serial: u32 },

    #[error("structure contains no ATOM residues to treat as termini")]
    NoPolymerResidues,
}

impl Error {
    pub fn unprotonated_histidine(res_name: impl Into<String>, res_seq: i32) -> Self {
        Self::UnprotonatedHistidine {
            res_name: res_name.into(),
            res_seq,
        }
    }

    pub fn dangling_terminus(marker: impl Into<String>, res_seq: i32) -> Self {
        Self::DanglingTerminus {
            marker: marker.into(),
            res_seq,
        }
    }

    pub fn atom_not_found(
        res_name: impl Into<String>,
        res_seq: i32,
        atom_name: impl Into<String>,
    ) -> Self {
        Self::AtomNotFound {
            res_name: res_name.into(),
            res_seq,
            atom_name: atom_name.into(),
        }
    }

    pub fn element_undetermined(atom_name: impl Into<String>, serial: u32) -> Self {
        Self::ElementUndetermined {
            atom_name: atom_name.into(),
            serial,
        }
    }
}

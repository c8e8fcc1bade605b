//! IO front-end for fixed-column PDB text.
//!
//! Readers turn MCCE-labeled or plain PDB streams into flat [`AtomRecord`] sequences;
//! the writer emits standard-width records that downstream MD engines accept.
//!
//! [`AtomRecord`]: crate::AtomRecord

mod error;
mod pdb;

pub use pdb::reader::{read_labeled as read_labeled_records, read_plain as read_pdb_records};
pub use pdb::writer::{
    format_atom_record, write_records as write_pdb_records,
    write_structure as write_pdb_structure,
};

pub use error::Error;

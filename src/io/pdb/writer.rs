use crate::io::error::Error;
use crate::model::{record::AtomRecord, structure::Structure};
use std::io::Write;

const MAX_SERIAL: u32 = 99_999;
const RES_SEQ_RANGE: std::ops::RangeInclusive<i32> = -999..=9_999;

/// Writes every record of a structure followed by an `END` record.
pub fn write_structure<W: Write>(writer: W, structure: &Structure) -> Result<(), Error> {
    write_records(writer, structure.iter_records())
}

/// Writes records in the given order followed by an `END` record.
pub fn write_records<'a, W, I>(writer: W, records: I) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = &'a AtomRecord>,
{
    let mut ctx = WriterContext::new(writer);

    for record in records {
        ctx.write_atom_record(record)?;
    }

    ctx.write_end()
}

struct WriterContext<W> {
    writer: W,
}

impl<W: Write> WriterContext<W> {
    fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_atom_record(&mut self, record: &AtomRecord) -> Result<(), Error> {
        let line = format_atom_record(record)?;
        writeln!(self.writer, "{line}").map_err(|e| Error::from_io(e, None))
    }

    fn write_end(&mut self) -> Result<(), Error> {
        writeln!(self.writer, "END").map_err(|e| Error::from_io(e, None))
    }
}

/// Formats a record as a standard-width (78 column) PDB line.
///
/// # Errors
///
/// Returns [`Error::ColumnOverflow`] when the atom serial exceeds five digits or the
/// residue number does not fit four columns.
pub fn format_atom_record(record: &AtomRecord) -> Result<String, Error> {
    if record.serial > MAX_SERIAL {
        return Err(Error::column_overflow("atom serial", record.serial, 5));
    }
    if !RES_SEQ_RANGE.contains(&record.res_seq) {
        return Err(Error::column_overflow("residue number", record.res_seq, 4));
    }

    let name = record.name.as_str();
    let atom_name = if name.len() >= 4 {
        format!("{:<4}", &name[0..4])
    } else {
        format!(" {:<3}", name)
    };

    let res_name = record.res_name.as_str();
    let res_name = if res_name.len() > 4 {
        &res_name[0..4]
    } else {
        res_name
    };

    Ok(format!(
        "{:6}{:>5} {:4}{:1}{:<4}{:1}{:>4}{:1}   {:8.3}{:8.3}{:8.3}{:6.2}{:6.2}          {:>2}",
        record.kind.label(),
        record.serial,
        atom_name,
        record.alt_loc.unwrap_or(' '),
        res_name,
        record.chain_id.unwrap_or(' '),
        record.res_seq,
        record.i_code.unwrap_or(' '),
        record.pos.x,
        record.pos.y,
        record.pos.z,
        record.occupancy,
        record.b_factor,
        record.element.as_str()
    ))
}

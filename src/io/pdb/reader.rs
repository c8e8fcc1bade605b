use crate::io::error::Error;
use crate::model::{
    record::AtomRecord,
    types::{Point, ProtonationFlag, RecordKind},
};
use std::io::BufRead;

const FORMAT: &str = "PDB";
const COORDINATE_END: usize = 54;
const STANDARD_WIDTH: usize = 80;

/// Reads an MCCE-labeled PDB stream.
///
/// Each `ATOM`/`HETATM` line carries a protonation flag, either on the line that
/// follows it (a line holding only `0`, `+` or `-`) or as the last non-blank character
/// of the atom line itself, past the standard 80 columns. Other record types are skipped.
pub fn read_labeled<R: BufRead>(reader: R) -> Result<Vec<AtomRecord>, Error> {
    read_records(reader, true)
}

/// Reads a plain PDB stream without protonation flags.
pub fn read_plain<R: BufRead>(reader: R) -> Result<Vec<AtomRecord>, Error> {
    read_records(reader, false)
}

fn read_records<R: BufRead>(reader: R, labeled: bool) -> Result<Vec<AtomRecord>, Error> {
    let mut records = Vec::new();
    let mut lines = reader.lines().enumerate().peekable();

    while let Some((idx, line)) = lines.next() {
        let line_num = idx + 1;
        let line = line.map_err(|e| Error::from_io(e, None))?;

        let Some(kind) = RecordKind::from_line(&line) else {
            continue;
        };

        let mut record = parse_atom_record(&line, line_num, kind)?;

        if labeled {
            let next_is_label = matches!(lines.peek(), Some((_, Ok(next))) if is_label_line(next));
            record.flag = if next_is_label {
                lines
                    .next()
                    .and_then(|(_, next)| next.ok())
                    .and_then(|next| next.trim().chars().next())
                    .and_then(ProtonationFlag::from_char)
            } else {
                inline_flag(&line)
            };
        }

        records.push(record);
    }

    Ok(records)
}

fn is_label_line(line: &str) -> bool {
    line.trim().chars().count() == 1
}

fn inline_flag(line: &str) -> Option<ProtonationFlag> {
    let trimmed = line.trim_end();
    if trimmed.len() <= STANDARD_WIDTH {
        return None;
    }
    trimmed.chars().last().and_then(ProtonationFlag::from_char)
}

fn field(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("")
}

fn column(line: &str, idx: usize) -> Option<char> {
    line.get(idx..idx + 1)
        .and_then(|s| s.chars().next())
        .filter(|c| *c != ' ')
}

pub(crate) fn parse_atom_record(
    line: &str,
    line_num: usize,
    kind: RecordKind,
) -> Result<AtomRecord, Error> {
    if line.len() < COORDINATE_END {
        return Err(Error::parse(FORMAT, None, line_num, "Atom record too short"));
    }

    let res_seq = field(line, 22, 26)
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::parse(FORMAT, None, line_num, "Invalid residue sequence number"))?;

    let coord = |start: usize, axis: &str| -> Result<f64, Error> {
        field(line, start, start + 8)
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::parse(FORMAT, None, line_num, format!("Invalid {axis} coordinate")))
    };
    let pos = Point::new(coord(30, "X")?, coord(38, "Y")?, coord(46, "Z")?);

    let serial = field(line, 6, 11).trim().parse::<u32>().unwrap_or(0);
    let occupancy = field(line, 54, 60).trim().parse::<f64>().unwrap_or(1.0);
    let b_factor = field(line, 60, 66).trim().parse::<f64>().unwrap_or(0.0);

    Ok(AtomRecord {
        kind,
        serial,
        name: field(line, 12, 16).trim().into(),
        alt_loc: column(line, 16),
        res_name: field(line, 17, 21).trim().into(),
        chain_id: column(line, 21),
        res_seq,
        i_code: column(line, 26),
        pos,
        occupancy,
        b_factor,
        element: field(line, 76, 78).trim().into(),
        flag: None,
    })
}

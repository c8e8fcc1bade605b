use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "I/O error for {path_desc}: {source}",
        path_desc = PathDisplay(path)
    )]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "failed to parse {format} {path_desc}: {details} (line {line_number})",
        path_desc = PathDisplay(path)
    )]
    Parse {
        format: &'static str,
        path: Option<PathBuf>,
        line_number: usize,
        details: String,
    },

    #[error("{field} {value} does not fit the {width}-column PDB field")]
    ColumnOverflow {
        field: &'static str,
        value: i64,
        width: usize,
    },
}

impl Error {
    pub fn from_io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    pub fn parse(
        format: &'static str,
        path: Option<PathBuf>,
        line_number: usize,
        details: impl Into<String>,
    ) -> Self {
        Self::Parse {
            format,
            path,
            line_number,
            details: details.into(),
        }
    }

    pub fn column_overflow(field: &'static str, value: impl Into<i64>, width: usize) -> Self {
        Self::ColumnOverflow {
            field,
            value: value.into(),
            width,
        }
    }

    /// Attaches a file path to errors that were raised while reading a stream.
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io { source, .. } => Self::Io {
                path: Some(new_path.into()),
                source,
            },
            Self::Parse {
                format,
                line_number,
                details,
                ..
            } => Self::Parse {
                format,
                path: Some(new_path.into()),
                line_number,
                details,
            },
            overflow @ Self::ColumnOverflow { .. } => overflow,
        }
    }
}

struct PathDisplay<'a>(&'a Option<PathBuf>);

impl<'a> fmt::Display for PathDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "file '{}'", p.display()),
            None => write!(f, "stream source"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_names_stream_and_line() {
        let err = Error::parse("PDB", None, 12, "Atom record too short");

        assert_eq!(
            err.to_string(),
            "failed to parse PDB stream source: Atom record too short (line 12)"
        );
    }

    #[test]
    fn with_path_rewrites_source_description() {
        let err = Error::parse("PDB", None, 3, "Invalid X coordinate").with_path("in.pdb");

        assert_eq!(
            err.to_string(),
            "failed to parse PDB file 'in.pdb': Invalid X coordinate (line 3)"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::from_io(source, Some(PathBuf::from("x.pdb")));

        assert!(err.to_string().starts_with("I/O error for file 'x.pdb'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn column_overflow_names_field_and_width() {
        let err = Error::column_overflow("atom serial", 100_000u32, 5).with_path("out.pdb");

        assert_eq!(
            err.to_string(),
            "atom serial 100000 does not fit the 5-column PDB field"
        );
    }
}

use std::fmt;
use std::fs::File;
use std::io::{self as stdio, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;

use amber_rename::io::{read_labeled_records, read_pdb_records, write_pdb_structure};
use amber_rename::{AtomRecord, Structure, Terminology};

pub mod convert;
pub mod info;
pub mod modeled;
pub mod renumber;

/// Input layouts understood by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayout {
    /// MCCE output with a protonation flag per atom record.
    Labeled,
    /// Plain PDB without flags.
    Plain,
}

impl fmt::Display for InputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputLayout::Labeled => write!(f, "labeled PDB"),
            InputLayout::Plain => write!(f, "PDB"),
        }
    }
}

/// Residue naming conventions selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TerminologyArg {
    /// AMBER and the ffamber GROMACS ports.
    #[default]
    #[value(name = "amber")]
    Amber,
    /// AMBER ports bundled with GROMACS.
    #[value(name = "gamber")]
    Gamber,
}

impl From<TerminologyArg> for Terminology {
    fn from(value: TerminologyArg) -> Self {
        match value {
            TerminologyArg::Amber => Terminology::Amber,
            TerminologyArg::Gamber => Terminology::GromacsAmber,
        }
    }
}

/// Aggregated IO parameters shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct IoParameters {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Loads records from the configured input source and nests them into residues.
pub fn load_input(params: &IoParameters, layout: InputLayout) -> Result<Structure> {
    let records = if let Some(path) = &params.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let reader = BufReader::new(file);
        read_records(reader, layout)
            .map_err(|e| e.with_path(path))
            .with_context(|| format!("Failed to parse {} input from {}", layout, path.display()))?
    } else {
        let stdin = stdio::stdin();
        if stdin.is_terminal() {
            bail!(
                "No --input provided and stdin is a TTY. Provide -i/--input or pipe a structure into amber-rename."
            );
        }
        let reader = BufReader::new(stdin.lock());
        read_records(reader, layout)
            .with_context(|| format!("Failed to parse {} input from stdin", layout))?
    };

    log::info!("Read {} atom record(s) as {}", records.len(), layout);
    Ok(Structure::nest(records))
}

fn read_records<R: BufRead>(
    reader: R,
    layout: InputLayout,
) -> Result<Vec<AtomRecord>, amber_rename::io::Error> {
    match layout {
        InputLayout::Labeled => read_labeled_records(reader),
        InputLayout::Plain => read_pdb_records(reader),
    }
}

/// Saves a structure to the configured output destination.
pub fn save_output(structure: &Structure, params: &IoParameters) -> Result<()> {
    match &params.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_pdb_structure(&mut writer, structure)
                .map_err(|e| e.with_path(path))
                .with_context(|| format!("Failed to write PDB output to {}", path.display()))?;
            writer.flush().context("Failed to flush output writer")?;
        }
        None => {
            let stdout = stdio::stdout();
            let handle = stdout.lock();
            let mut writer = BufWriter::new(handle);
            write_pdb_structure(&mut writer, structure)
                .context("Failed to write PDB output to stdout")?;
            writer.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

/// Wraps long-running operations with a spinner rendered to stderr.
pub fn run_with_spinner<T, F>(message: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{} ✓", message)),
        Err(_) => spinner.abandon_with_message(format!("{} ✗", message)),
    }

    result
}

/// Returns true when stdout is a TTY and no explicit output file was supplied.
pub fn interactive_stdout_requested(params: &IoParameters) -> bool {
    params.output.is_none() && stdio::stdout().is_terminal()
}

/// Ensures commands do not dump PDB text directly into an interactive terminal.
pub fn ensure_noninteractive_stdout(command: &str, params: &IoParameters) -> Result<()> {
    if interactive_stdout_requested(params) {
        bail!(
            "Refusing to stream {command} results to an interactive terminal. Use -o/--output or pipe the command into a file."
        );
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;

use commands::{InputLayout, IoParameters};
use commands::{convert, info, modeled, renumber};

#[derive(Parser, Debug)]
#[command(
    name = "amber-rename",
    about = "Renames residues and atoms of MCCE-labeled protein structures into AMBER-compatible PDB files.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Input file path. When omitted, stdin is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,
    /// Output file path. When omitted, stdout is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an MCCE-labeled PDB into AMBER or GROMACS-AMBER naming.
    Convert(convert::ConvertArgs),
    /// Rename the termini of a structure built by an external modeller.
    Modeled(modeled::ModeledArgs),
    /// Renumber atom serials from one.
    Renumber(renumber::RenumberArgs),
    /// Inspect a labeled structure without writing output.
    Info(info::InfoArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let io_params = IoParameters {
        input: cli.input.clone(),
        output: cli.output.clone(),
    };

    match cli.command {
        Command::Convert(args) => {
            commands::ensure_noninteractive_stdout("convert", &io_params)?;
            let mut structure = commands::load_input(&io_params, InputLayout::Labeled)?;
            convert::run(&mut structure, &args)?;
            commands::save_output(&structure, &io_params)?;
        }
        Command::Modeled(args) => {
            commands::ensure_noninteractive_stdout("modeled", &io_params)?;
            let mut structure = commands::load_input(&io_params, InputLayout::Plain)?;
            modeled::run(&mut structure, &args)?;
            commands::save_output(&structure, &io_params)?;
        }
        Command::Renumber(args) => {
            commands::ensure_noninteractive_stdout("renumber", &io_params)?;
            let mut structure = commands::load_input(&io_params, InputLayout::Plain)?;
            renumber::run(&mut structure, &args)?;
            commands::save_output(&structure, &io_params)?;
        }
        Command::Info(args) => {
            let structure = commands::load_input(&io_params, InputLayout::Labeled)?;
            info::run(&structure, &args)?;
        }
    }

    Ok(())
}

use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use amber_rename::{ProtonationFlag, RecordKind, Structure};

use crate::commands::run_with_spinner;

/// Report-only command that inspects a labeled structure.
#[derive(Debug, Default, Args)]
pub struct InfoArgs {}

/// Computes and prints structure statistics without mutating the structure.
pub fn run(structure: &Structure, _args: &InfoArgs) -> Result<()> {
    let report = run_with_spinner("Analyzing structure", || {
        Ok(StructureReport::collect(structure))
    })?;

    print_tables(&report)
}

#[derive(Debug, Default)]
struct StructureReport {
    residues: usize,
    atoms: usize,
    polymer_residues: usize,
    hetero_residues: usize,
    n_markers: usize,
    c_markers: usize,
    unprotonated_histidines: Vec<i32>,
    inventory: BTreeMap<String, FlagCounts>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct FlagCounts {
    total: usize,
    neutral: usize,
    positive: usize,
    negative: usize,
    unlabeled: usize,
}

impl FlagCounts {
    fn add(&mut self, flag: Option<ProtonationFlag>) {
        self.total += 1;
        match flag {
            Some(ProtonationFlag::Neutral) => self.neutral += 1,
            Some(ProtonationFlag::Positive) => self.positive += 1,
            Some(ProtonationFlag::Negative) => self.negative += 1,
            None => self.unlabeled += 1,
        }
    }
}

impl StructureReport {
    fn collect(structure: &Structure) -> Self {
        let mut report = StructureReport {
            residues: structure.residue_count(),
            atoms: structure.atom_count(),
            ..Default::default()
        };

        for residue in structure.iter_residues() {
            match residue.kind() {
                RecordKind::Atom => report.polymer_residues += 1,
                RecordKind::Hetatm => report.hetero_residues += 1,
            }
            match residue.name() {
                "NTR" | "NTG" => report.n_markers += 1,
                "CTR" => report.c_markers += 1,
                "HIS" if !residue.has_atom("HD1") && !residue.has_atom("HE2") => {
                    report.unprotonated_histidines.push(residue.res_seq())
                }
                _ => {}
            }
            report
                .inventory
                .entry(residue.name().to_string())
                .or_default()
                .add(residue.flag());
        }

        report
    }

    fn termini_balanced(&self) -> bool {
        self.n_markers == self.c_markers
    }
}

fn print_tables(report: &StructureReport) -> Result<()> {
    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "amber-rename Structure Report")?;
    writeln!(&mut stderr)?;

    let mut summary_table = Table::new();
    print_boxed_label(&mut stderr, "Structure Summary")?;
    summary_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    summary_table.set_titles(row!["Metric", "Value"]);
    summary_table.add_row(row!["Residues", report.residues]);
    summary_table.add_row(row!["Atoms", report.atoms]);
    summary_table.add_row(row!["ATOM Residues", report.polymer_residues]);
    summary_table.add_row(row!["HETATM Residues", report.hetero_residues]);
    summary_table.add_row(row![
        "Terminus Markers (N / C)",
        format!(
            "{} / {}{}",
            report.n_markers,
            report.c_markers,
            if report.termini_balanced() { "" } else { " (unbalanced)" }
        )
    ]);
    let histidines = if report.unprotonated_histidines.is_empty() {
        "None".to_string()
    } else {
        report
            .unprotonated_histidines
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    summary_table.add_row(row!["Histidines Without Ring H", histidines]);
    summary_table
        .print(&mut stderr)
        .context("Failed to render structure summary")?;
    writeln!(&mut stderr)?;

    let mut inventory_table = Table::new();
    print_boxed_label(&mut stderr, "Residue Inventory")?;
    inventory_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    inventory_table.set_titles(row!["Residue", "Count", "0", "+", "-", "Unlabeled"]);
    for (name, counts) in &report.inventory {
        inventory_table.add_row(row![
            name,
            counts.total,
            counts.neutral,
            counts.positive,
            counts.negative,
            counts.unlabeled
        ]);
    }
    inventory_table
        .print(&mut stderr)
        .context("Failed to render residue inventory")?;

    Ok(())
}

fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}

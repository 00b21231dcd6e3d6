//! Console rendering

use std::path::{MAIN_SEPARATOR_STR, Path};

use colored::Colorize;

use crate::materialize::ProgressSink;
use crate::project::ProjectOutcome;
use crate::template::{Template, TemplateStore};

/// Prints one line per created folder
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for ConsoleSink {
    fn folder_created(&mut self, relative: &str, _path: &Path) {
        println!("  {} {}", "✓".green(), display_path(relative));
    }
}

/// Use the host separator for display; never used for anything written to disk
pub fn display_path(relative: &str) -> String {
    relative.replace('/', MAIN_SEPARATOR_STR)
}

pub fn print_banner() {
    println!();
    println!("{}", "QuickPrep - project skeleton generator".bright_cyan().bold());
    println!("{}", "=".repeat(40).dimmed());
}

pub fn print_section(title: &str) {
    println!();
    println!("{}", title.bright_cyan().bold());
}

/// One-line preview of a template's folders
pub fn template_preview(template: &Template) -> String {
    if template.folders.is_empty() {
        return "(no folders)".to_string();
    }
    template.folders.join(", ")
}

/// Print the merged template list plus any sources that were skipped
pub fn print_templates(store: &TemplateStore) {
    print_skipped(store);
    for (i, template) in store.templates().iter().enumerate() {
        println!(
            "  [{}] {} {}",
            (i + 1).to_string().yellow(),
            template.name.bold(),
            format!("({})", template_preview(template)).dimmed()
        );
    }
    if store.is_builtin() {
        println!("  {}", "using builtin templates".dimmed());
    }
}

pub fn print_skipped(store: &TemplateStore) {
    for err in store.skipped() {
        println!("{} {}", "warning:".yellow().bold(), err);
    }
}

pub fn print_summary(outcome: &ProjectOutcome) {
    println!();
    println!(
        "{} Created {} folder(s) in {}",
        "✓".green().bold(),
        outcome.structure.created.len(),
        outcome.structure.root.display().to_string().cyan()
    );
    println!("  {} {}", "README:".dimmed(), outcome.manifest_path.display());
}

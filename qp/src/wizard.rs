//! Interactive question flow
//!
//! Asks for the project name, where to put it, which template to start from
//! and any extra folders. Input is read through [`LineSource`] so the same
//! flow can be driven by a script in tests.

use std::collections::VecDeque;
use std::path::PathBuf;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::error::validate_project_name;
use crate::location::RootLocation;
use crate::output;
use crate::template::TemplateStore;

/// Word that ends extra folder entry
pub const DONE_SENTINEL: &str = "done";

/// Something that yields lines of user input
pub trait LineSource {
    /// Read one line; `None` means the user cancelled
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input with line editing and history
pub struct ReadlineSource {
    rl: DefaultEditor,
}

impl ReadlineSource {
    pub fn new() -> Result<Self> {
        let rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { rl })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.rl.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Pre-recorded input, one entry per line
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().to_string()).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let line = self.lines.pop_front();
        debug!(prompt, ?line, "ScriptedLines::read_line");
        Ok(line)
    }
}

/// Everything the user chose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub name: String,
    pub location: RootLocation,
    /// Zero-based template index, `None` for a custom layout
    pub template: Option<usize>,
    pub extras: Vec<String>,
}

/// Walks the user through creating a project
pub struct Wizard<'a, L: LineSource> {
    input: L,
    store: &'a TemplateStore,
}

impl<'a, L: LineSource> Wizard<'a, L> {
    pub fn new(input: L, store: &'a TemplateStore) -> Self {
        Self { input, store }
    }

    /// Ask every question; `Ok(None)` if the user cancelled
    ///
    /// A blank project name is an error and ends the flow immediately.
    pub fn run(&mut self) -> Result<Option<Answers>> {
        let Some(name) = self.ask_name()? else {
            return Ok(None);
        };
        let Some(location) = self.ask_location()? else {
            return Ok(None);
        };
        let Some(template) = self.ask_template()? else {
            return Ok(None);
        };
        let Some(extras) = self.ask_extras()? else {
            return Ok(None);
        };

        Ok(Some(Answers {
            name,
            location,
            template,
            extras,
        }))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.input.read_line(&format!("{} {} ", text, ">".bright_green()))
    }

    fn ask_name(&mut self) -> Result<Option<String>> {
        output::print_section("Project name");
        let Some(line) = self.prompt("Name")? else {
            return Ok(None);
        };
        let name = validate_project_name(&line)?;
        Ok(Some(name.to_string()))
    }

    fn ask_location(&mut self) -> Result<Option<RootLocation>> {
        output::print_section("Location");
        println!("  [{}] Current directory", "1".yellow());
        println!("  [{}] Desktop", "2".yellow());
        println!("  [{}] Other path", "3".yellow());

        loop {
            let Some(line) = self.prompt("Choice (1-3, default 1)")? else {
                return Ok(None);
            };
            match line.trim() {
                "" | "1" => return Ok(Some(RootLocation::Current)),
                "2" => return Ok(Some(RootLocation::Desktop)),
                "3" => loop {
                    let Some(path) = self.prompt("Path")? else {
                        return Ok(None);
                    };
                    let path = path.trim();
                    if !path.is_empty() {
                        return Ok(Some(RootLocation::Explicit(PathBuf::from(path))));
                    }
                    println!("{}", "Path must not be empty".red());
                },
                other => println!("{} {}", "Not a valid choice:".red(), other),
            }
        }
    }

    fn ask_template(&mut self) -> Result<Option<Option<usize>>> {
        output::print_section("Template");
        output::print_templates(self.store);
        let custom = self.store.len() + 1;
        println!("  [{}] {}", custom.to_string().yellow(), "Custom (enter folders yourself)".bold());

        loop {
            let Some(line) = self.prompt(&format!("Choice (1-{})", custom))? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if n == custom => return Ok(Some(None)),
                Ok(n) if (1..custom).contains(&n) => return Ok(Some(Some(n - 1))),
                _ => println!("{} {}", "Not a valid choice:".red(), line.trim()),
            }
        }
    }

    fn ask_extras(&mut self) -> Result<Option<Vec<String>>> {
        output::print_section("Extra folders");
        println!(
            "  One path per line, braces expand ({}). Finish with '{}' or an empty line.",
            "assets/{css,js}".cyan(),
            DONE_SENTINEL.yellow()
        );

        let mut extras = Vec::new();
        loop {
            let Some(line) = self.prompt("Folder")? else {
                return Ok(None);
            };
            let entry = line.trim();
            if entry.is_empty() || entry.eq_ignore_ascii_case(DONE_SENTINEL) {
                break;
            }
            extras.push(entry.to_string());
        }
        Ok(Some(extras))
    }
}

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::styles::split_variant;
use crate::{manifest, output, recolor};

/// What each menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RecolorOne,
    RecolorAll,
    Manifest,
}

pub struct MenuOption {
    pub id: u32,
    pub label: &'static str,
    pub action: Action,
}

/// The fixed option table; dispatch is by id, first match.
pub const OPTIONS: &[MenuOption] = &[
    MenuOption {
        id: 0,
        label: "Generate alternative color styles for an SVG",
        action: Action::RecolorOne,
    },
    MenuOption {
        id: 1,
        label: "Generate alternative color styles for every -black SVG",
        action: Action::RecolorAll,
    },
    MenuOption {
        id: 2,
        label: "Print DEFAULT_TOPICS for all generated SVGs",
        action: Action::Manifest,
    },
];

/// Print the menu, read one selection from stdin, dispatch. A number that
/// matches no option is a no-op; a non-numeric line is an error.
pub fn run(dir: &Path) -> Result<()> {
    println!("Welcome to the svgtint utility!");
    println!("{}", "-".repeat(20));
    for option in OPTIONS {
        println!("{} - {}", option.id, option.label);
    }
    println!("{}", "-".repeat(20));

    let line = prompt("Enter the number for a selection:")?;
    let choice: u32 = line.trim().parse().context("selection must be a number")?;

    match OPTIONS.iter().find(|o| o.id == choice) {
        Some(option) => dispatch(option.action, dir),
        None => Ok(()),
    }
}

pub fn dispatch(action: Action, dir: &Path) -> Result<()> {
    match action {
        Action::RecolorOne => {
            println!("Path should be {}", dir.display());
            let name = prompt("Enter the SVG name:")?;
            recolor_one(dir, name.trim())
        }
        Action::RecolorAll => {
            for entry in recolor::generate_all(dir)? {
                println!("{entry}");
            }
            Ok(())
        }
        Action::Manifest => {
            let entries = manifest::collect(dir)?;
            println!("{}", output::format_text(&entries));
            Ok(())
        }
    }
}

/// Single-file generation with its progress line; shared by the menu and
/// the `recolor` subcommand.
pub fn recolor_one(dir: &Path, file_name: &str) -> Result<()> {
    let variant = split_variant(file_name)?;
    println!("Using {} as base style to set others from", variant.style);
    for entry in recolor::generate_variants(dir, file_name)? {
        println!("{entry}");
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_ids_are_unique_and_sequential() {
        for (i, option) in OPTIONS.iter().enumerate() {
            assert_eq!(option.id, i as u32);
        }
    }

    #[test]
    fn every_action_has_an_option() {
        for action in [Action::RecolorOne, Action::RecolorAll, Action::Manifest] {
            assert!(OPTIONS.iter().any(|o| o.action == action));
        }
    }
}

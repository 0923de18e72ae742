//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of the standard locations
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::ui::render::Style;

/// Cubework - quarter turns and net views for a 3x3x3 cube
#[derive(Parser, Debug)]
#[command(name = "cube")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Rendering flags shared by `view` and `session`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Print the net as JSON
    #[arg(long)]
    pub json: bool,

    /// Text style (overrides view.style)
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Character for cells outside the net (overrides view.empty)
    #[arg(long, value_name = "CHAR")]
    pub empty: Option<char>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply moves to a solved cube and print its net
    #[command(
        name = "view",
        long_about = "Apply a move sequence to a freshly solved cube and print the \
            exploded net.\n\n\
            Moves use Singmaster notation: U D F B L R for clockwise quarter turns, \
            with a trailing apostrophe for counter-clockwise (F'). Face names work \
            too (front, front').",
        after_help = "\
EXAMPLES:
    # The solved cube
    cube view

    # A few quarter turns
    cube view F U\\' R

    # Machine-readable output
    cube view --json R U R\\' U\\'

READING THE OUTPUT:
    Faces are laid out Up / Left Front Right Back / Down, one colour letter
    per sticker (W Y R O B G). The solved cube prints:

          W W W
          W W W
          W W W
    O O O G G G R R R B B B
    O O O G G G R R R B B B
    O O O G G G R R R B B B
          Y Y Y
          Y Y Y
          Y Y Y"
    )]
    View {
        /// Moves to apply, in order
        #[arg(value_name = "MOVE")]
        moves: Vec<String>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Drive one cube interactively over stdin
    #[command(
        name = "session",
        long_about = "Read reset / move / view requests from stdin, one per line, and \
            answer on stdout. The cube lives for the length of the session.",
        after_help = "\
PROTOCOL:
    reset               restore the solved cube        -> ok
    move F'             notation                       -> ok
    move front ccw      face name or letter + cw/ccw   -> ok
    move 2 true         face code 0-5 + clockwise flag -> ok
    view                print the net
    quit                end the session

    Bad requests answer 'error: <message>' and leave the cube unchanged."
    )]
    Session {
        #[command(flatten)]
        render: RenderArgs,

        /// Print the net after every successful move (overrides session.auto_view)
        #[arg(long)]
        auto_view: bool,
    },

    /// Inspect or change configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print every effective setting
    List,
    /// Print one effective setting
    Get {
        /// Dotted key, e.g. view.style
        key: String,
    },
    /// Set a value in the config file
    Set {
        /// Dotted key, e.g. view.style
        key: String,
        /// New value
        value: String,
    },
    /// Print the config file path
    Path,
}

/// Shells supported by `completion`.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_view_moves() {
        let cli = Cli::try_parse_from(["cube", "view", "F", "U'", "--json"]).unwrap();
        match cli.command {
            Command::View { moves, render } => {
                assert_eq!(moves, vec!["F", "U'"]);
                assert!(render.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cube", "session", "--debug", "--style", "ansi"]).unwrap();
        assert!(cli.debug);
        match cli.command {
            Command::Session { render, auto_view } => {
                assert_eq!(render.style, Some(Style::Ansi));
                assert!(!auto_view);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn view_help_shows_solved_output() {
        let help = Cli::command()
            .find_subcommand_mut("view")
            .map(|view| view.render_long_help().to_string())
            .unwrap();
        let solved = crate::ui::render::Renderer::default()
            .render(&crate::core::net::Net::from_state(
                &crate::core::cube::CubeState::solved(),
            ))
            .unwrap();
        for line in solved.lines().filter(|line| !line.trim().is_empty()) {
            assert!(help.contains(line), "missing {line:?}");
        }
    }

    #[test]
    fn parses_config_set() {
        let cli = Cli::try_parse_from(["cube", "config", "set", "view.style", "ansi"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Set { .. }
            }
        ));
    }
}

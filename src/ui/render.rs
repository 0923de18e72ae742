//! ui::render
//!
//! Turns a [`Net`] into printable output.
//!
//! # Formats
//!
//! - `text` / `letters`: one letter per sticker, separated by spaces
//! - `text` / `ansi`: each sticker painted as a coloured block
//! - `json`: nested arrays of colour codes and `null`

use std::str::FromStr;

use clap::ValueEnum;
use colored::{ColoredString, Colorize};

use crate::core::net::Net;
use crate::core::types::Colour;

/// Output format for the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Style of text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    #[default]
    Letters,
    Ansi,
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Net renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub format: Format,
    pub style: Style,
    /// Character for cells outside the net (letters style only).
    pub empty: char,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            format: Format::Text,
            style: Style::Letters,
            empty: ' ',
        }
    }
}

impl Renderer {
    /// Render the net.
    ///
    /// # Errors
    ///
    /// Returns the serializer error for JSON output.
    pub fn render(&self, net: &Net) -> Result<String, serde_json::Error> {
        match (self.format, self.style) {
            (Format::Json, _) => serde_json::to_string(net),
            (Format::Text, Style::Letters) => Ok(self.letters(net)),
            (Format::Text, Style::Ansi) => Ok(ansi(net)),
        }
    }

    fn letters(&self, net: &Net) -> String {
        net.rows()
            .iter()
            .map(|row| {
                let line = row
                    .iter()
                    .map(|cell| cell.map_or(self.empty, Colour::letter).to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn ansi(net: &Net) -> String {
    net.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(colour) => paint(*colour).to_string(),
                    None => "   ".to_string(),
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paint(colour: Colour) -> ColoredString {
    let block = format!(" {} ", colour.letter());
    match colour {
        Colour::White => block.black().on_white(),
        Colour::Yellow => block.black().on_yellow(),
        Colour::Red => block.white().on_red(),
        Colour::Orange => block.black().on_truecolor(255, 140, 0),
        Colour::Blue => block.white().on_blue(),
        Colour::Green => block.black().on_green(),
    }
}

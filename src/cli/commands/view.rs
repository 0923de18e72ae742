//! view command - Apply moves to a solved cube and print the net

use crate::cli::args::RenderArgs;
use crate::core::types::Turn;
use crate::engine::{Context, CubeService};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Apply `moves` to a fresh cube and print its net.
///
/// Every move is parsed before any is applied, so a typo late in the
/// sequence prints nothing.
pub fn view(ctx: &Context, moves: &[String], render: &RenderArgs) -> Result<()> {
    let renderer = super::renderer(ctx, render)?;

    let turns = moves
        .iter()
        .map(|m| m.parse::<Turn>())
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to parse moves")?;

    tracing::debug!(moves = %output::format_turns(&turns), "applying");

    let service = CubeService::new();
    service.apply_all(&turns);

    let rendered = renderer
        .render(&service.view())
        .context("Failed to render net")?;
    println!("{}", rendered);

    Ok(())
}

//! session command - Serve the line protocol over stdin/stdout

use std::io;

use crate::cli::args::RenderArgs;
use crate::engine::{Context, CubeService, Session, SessionOptions};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Run a protocol session on stdin/stdout until EOF or `quit`.
pub fn session(ctx: &Context, render: &RenderArgs, auto_view: bool) -> Result<()> {
    let options = SessionOptions {
        renderer: super::renderer(ctx, render)?,
        prompt: ctx.config.session_prompt().to_string(),
        auto_view: auto_view || ctx.config.session_auto_view(),
    };

    let service = CubeService::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    let stats = Session::new(&service, options)
        .run(stdin.lock(), &mut stdout)
        .context("Session I/O failed")?;

    tracing::debug!(
        requests = stats.requests,
        moves = stats.moves,
        errors = stats.errors,
        "session finished"
    );
    if stats.errors > 0 {
        output::warn(
            format!("{} request(s) were rejected", stats.errors),
            ctx.verbosity(),
        );
    }

    Ok(())
}

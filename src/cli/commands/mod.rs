//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves flags against the loaded configuration
//! 2. Calls the engine to do the work
//! 3. Formats and displays output
//!
//! Handlers never touch cube state directly; every turn flows through a
//! [`crate::engine::CubeService`].

mod completion;
mod config_cmd;
mod session;
mod view;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, path as config_path, set as config_set};
pub use session::session;
pub use view::view;

use crate::cli::args::{Command, ConfigAction, RenderArgs};
use crate::engine::Context;
use crate::ui::render::{Format, Renderer, Style};
use anyhow::{anyhow, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::View { moves, render } => view::view(ctx, &moves, &render),
        Command::Session { render, auto_view } => session::session(ctx, &render, auto_view),
        Command::Config { action } => match action {
            ConfigAction::List => config_cmd::list(ctx),
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::Path => config_cmd::path(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Build the net renderer: CLI flags first, then config, then defaults.
pub fn renderer(ctx: &Context, args: &RenderArgs) -> Result<Renderer> {
    let format = if args.json {
        Format::Json
    } else {
        ctx.config
            .view_format()
            .parse::<Format>()
            .map_err(|e| anyhow!("view.format: {}", e))?
    };

    let style = match args.style {
        Some(style) => style,
        None => ctx
            .config
            .view_style()
            .parse::<Style>()
            .map_err(|e| anyhow!("view.style: {}", e))?,
    };

    Ok(Renderer {
        format,
        style,
        empty: args.empty.unwrap_or_else(|| ctx.config.view_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Config, GlobalConfig};

    fn ctx_with(global: GlobalConfig) -> Context {
        Context {
            config: Config::from_global(global),
            ..Default::default()
        }
    }

    #[test]
    fn renderer_defaults() {
        let renderer = renderer(&Context::default(), &RenderArgs::default()).unwrap();
        assert_eq!(renderer, Renderer::default());
    }

    #[test]
    fn config_supplies_renderer_settings() {
        let mut global = GlobalConfig::default();
        global.set_value("view.format", "json").unwrap();
        global.set_value("view.empty", "-").unwrap();

        let renderer = renderer(&ctx_with(global), &RenderArgs::default()).unwrap();
        assert_eq!(renderer.format, Format::Json);
        assert_eq!(renderer.empty, '-');
    }

    #[test]
    fn flags_override_config() {
        let mut global = GlobalConfig::default();
        global.set_value("view.style", "ansi").unwrap();
        global.set_value("view.empty", "-").unwrap();

        let args = RenderArgs {
            style: Some(Style::Letters),
            empty: Some('.'),
            ..Default::default()
        };
        let renderer = renderer(&ctx_with(global), &args).unwrap();
        assert_eq!(renderer.style, Style::Letters);
        assert_eq!(renderer.empty, '.');
    }
}

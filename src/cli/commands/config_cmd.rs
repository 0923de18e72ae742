//! config command - List, get, set configuration values or print the path

use crate::core::config::{Config, KEYS};
use crate::engine::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Print every effective setting as `key = value`.
pub fn list(ctx: &Context) -> Result<()> {
    for key in KEYS {
        let value = ctx.config.get(key)?;
        println!("{} = {:?}", key, value);
    }
    Ok(())
}

/// Print one effective setting.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = ctx.config.get(key)?;
    println!("{}", value);
    Ok(())
}

/// Set a value and write the config file back.
///
/// Writes to the file the config was loaded from, or to the canonical
/// location when none was found.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = match ctx.config.loaded_from() {
        Some(path) => path.to_path_buf(),
        None => Config::global_config_path()?,
    };

    let mut global = ctx.config.global.clone();
    global.set_value(key, value)?;
    Config::write_to(&path, &global)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    output::print(
        format!("Set {} = {} in {}", key, value, path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// Print the config file in use, or the canonical location.
pub fn path(ctx: &Context) -> Result<()> {
    let path = match ctx.config.loaded_from() {
        Some(path) => path.to_path_buf(),
        None => Config::global_config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}

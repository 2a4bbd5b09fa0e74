//! Print the resolved configuration.

use crate::config::Settings;

/// Render the effective settings as TOML for operator inspection.
pub fn cmd_config(settings: &Settings) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}

//! `trail styles` command implementation.

use std::path::PathBuf;

use clap::Args;
use trail_config::Config;
use trail_renderer::StyleRegistry;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the styles command.
#[derive(Args)]
pub(crate) struct StylesArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "TRAIL_CONFIG")]
    config: Option<PathBuf>,
}

impl StylesArgs {
    /// Execute the styles command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref())?;
        let registry = StyleRegistry::global();
        config.register_styles(registry);

        for name in registry.names() {
            output.result(&name);
        }
        Ok(())
    }
}

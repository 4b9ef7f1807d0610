//! `trail links` command implementation.

use clap::Args;

use super::session::CrumbArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the links command.
#[derive(Args)]
pub(crate) struct LinksArgs {
    #[command(flatten)]
    crumb: CrumbArgs,
}

impl LinksArgs {
    /// Execute the links command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a crumb is undefined or
    /// serialization fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let session = self.crumb.session()?;
        let json = session
            .renderer()
            .yield_links(&session.options, |links| serde_json::to_string_pretty(links))??;
        output.result(&json);
        Ok(())
    }
}

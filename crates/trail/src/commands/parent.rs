//! `trail parent` command implementation.

use clap::Args;

use super::session::CrumbArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the parent command.
#[derive(Args)]
pub(crate) struct ParentArgs {
    #[command(flatten)]
    crumb: CrumbArgs,
}

impl ParentArgs {
    /// Execute the parent command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or a crumb is undefined.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let session = self.crumb.session()?;
        let printed = session
            .renderer()
            .yield_parent_breadcrumb(&session.options, |link| {
                output.highlight(&link.text);
                if let Some(url) = &link.url {
                    output.result(url);
                }
            })?;

        if printed.is_none() {
            output.info("No parent breadcrumb.");
        }
        Ok(())
    }
}

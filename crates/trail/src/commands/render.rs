//! `trail render` command implementation.

use clap::Args;

use super::session::CrumbArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    crumb: CrumbArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or rendering fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let session = self.crumb.session()?;
        let html = session.renderer().render(&session.options)?;

        if html.is_empty() {
            output.info("No breadcrumbs to render.");
        } else {
            output.result(&html);
        }
        Ok(())
    }
}

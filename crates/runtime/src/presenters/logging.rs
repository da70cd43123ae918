use feud_core::PresentationCommand;

use crate::api::{Presenter, Result};

/// Logs every command at debug level. Useful when no display is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn present(&mut self, command: &PresentationCommand) -> Result<()> {
        match command {
            PresentationCommand::PlayCue { cue, delay_ms } => {
                tracing::debug!(cue = cue.key(), group = %cue.group(), delay_ms, "play cue");
            }
            PresentationCommand::ShowPrompt {
                prompt,
                strike_count,
                staged,
                ..
            } => {
                tracing::debug!(prompt = prompt.0, strike_count, staged, "show prompt");
            }
            other => tracing::debug!(command = ?other, "present"),
        }
        Ok(())
    }
}

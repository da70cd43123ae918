//! Abstraction over the player-facing display.
//!
//! Runtime users plug in [`Presenter`] implementations so the show can drive
//! a separate display process, a log, or a test recorder.
use feud_core::PresentationCommand;

use super::errors::Result;

/// Receives presentation commands in the order the director emits them.
///
/// Commands are fire-and-forget: the presenter never reports anything back
/// into the round state.
pub trait Presenter {
    fn present(&mut self, command: &PresentationCommand) -> Result<()>;

    /// Called once after each producer command's batch.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, command: &PresentationCommand) -> Result<()> {
        (**self).present(command)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

//! Contract between the composition root and a user-facing front-end.
use anyhow::Result;
use feud_runtime::Controller;

/// A front-end drives the controller until the producer is done.
///
/// The front-end borrows the controller for the whole session; nothing else
/// touches it while `run` is executing.
pub trait Frontend {
    fn run(&mut self, controller: &mut Controller) -> Result<()>;
}

use std::cell::RefCell;
use std::rc::Rc;

use feud_core::PresentationCommand;

use crate::api::{Presenter, Result};

/// Keeps every command it receives. Clones share the same log, so a test can
/// hand one clone to the controller and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    log: Rc<RefCell<Vec<PresentationCommand>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<PresentationCommand> {
        self.log.borrow().clone()
    }

    /// Returns and clears everything recorded so far.
    pub fn take(&self) -> Vec<PresentationCommand> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, command: &PresentationCommand) -> Result<()> {
        self.log.borrow_mut().push(command.clone());
        Ok(())
    }
}

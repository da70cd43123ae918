use feud_core::PresentationCommand;

use crate::api::{Presenter, Result};

/// Forwards each command to several presenters in order.
///
/// Every presenter sees the command even if an earlier one failed; the first
/// error is returned.
#[derive(Default)]
pub struct FanoutPresenter {
    presenters: Vec<Box<dyn Presenter>>,
}

impl FanoutPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenters.push(Box::new(presenter));
        self
    }

    pub fn push(&mut self, presenter: Box<dyn Presenter>) {
        self.presenters.push(presenter);
    }

    pub fn len(&self) -> usize {
        self.presenters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presenters.is_empty()
    }
}

impl Presenter for FanoutPresenter {
    fn present(&mut self, command: &PresentationCommand) -> Result<()> {
        let mut first_error = None;
        for presenter in &mut self.presenters {
            if let Err(err) = presenter.present(command) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn flush(&mut self) -> Result<()> {
        let mut first_error = None;
        for presenter in &mut self.presenters {
            if let Err(err) = presenter.flush() {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

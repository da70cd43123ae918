use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use feud_client::{Client, Frontend};
use feud_core::{ProducerCommand, PromptDraft, PromptStore, RoundPhase};
use feud_runtime::{Controller, RecordingPresenter};

fn controller() -> Controller {
    let store = PromptStore::from_drafts(
        "Classic",
        [PromptDraft::new(
            "Name a fruit",
            ["Apple".into(), "Banana".into(), "Orange".into(), "Grape".into()],
        )],
    );
    Controller::builder()
        .store(store)
        .presenter(RecordingPresenter::new())
        .build()
        .unwrap()
}

struct StartOnce {
    ran: Rc<Cell<bool>>,
}

impl Frontend for StartOnce {
    fn run(&mut self, controller: &mut Controller) -> Result<()> {
        controller.dispatch(&ProducerCommand::SelectRandom)?;
        controller.dispatch(&ProducerCommand::StartGame)?;
        self.ran.set(true);
        Ok(())
    }
}

#[test]
fn run_lends_the_controller_to_the_frontend() {
    let ran = Rc::new(Cell::new(false));
    let client = Client::builder()
        .controller(controller())
        .frontend(StartOnce { ran: ran.clone() })
        .build()
        .unwrap();

    assert_eq!(client.controller().round().phase(), RoundPhase::NotStarted);
    client.run().unwrap();
    assert!(ran.get());
}

#[test]
fn build_requires_both_parts() {
    let missing_frontend = Client::builder().controller(controller()).build();
    assert!(
        missing_frontend
            .err()
            .unwrap()
            .to_string()
            .contains("Frontend is required")
    );

    let missing_controller = Client::builder()
        .frontend(StartOnce {
            ran: Rc::new(Cell::new(false)),
        })
        .build();
    assert!(
        missing_controller
            .err()
            .unwrap()
            .to_string()
            .contains("Controller is required")
    );
}

struct Failing;

impl Frontend for Failing {
    fn run(&mut self, controller: &mut Controller) -> Result<()> {
        controller.dispatch(&ProducerCommand::NextRound)?;
        Ok(())
    }
}

#[test]
fn frontend_errors_surface_from_run() {
    let client = Client::builder()
        .controller(controller())
        .frontend(Failing)
        .build()
        .unwrap();
    assert!(client.run().is_err());
}

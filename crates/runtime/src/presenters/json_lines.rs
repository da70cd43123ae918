use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use feud_core::PresentationCommand;

use crate::api::{Presenter, Result, RuntimeError};

/// Writes one JSON object per command, one per line.
///
/// This is the feed a separate player display process tails.
pub struct JsonLinesPresenter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesPresenter<BufWriter<File>> {
    /// Appends to the feed file at `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(RuntimeError::Presenter)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Presenter for JsonLinesPresenter<W> {
    fn present(&mut self, command: &PresentationCommand) -> Result<()> {
        serde_json::to_writer(&mut self.writer, command).map_err(RuntimeError::Encode)?;
        self.writer
            .write_all(b"\n")
            .map_err(RuntimeError::Presenter)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(RuntimeError::Presenter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feud_core::CueId;

    #[test]
    fn writes_tagged_objects_one_per_line() {
        let mut presenter = JsonLinesPresenter::new(Vec::new());
        presenter
            .present(&PresentationCommand::delayed_cue(CueId::Whoosh2, 600))
            .unwrap();
        presenter
            .present(&PresentationCommand::SetStrikeVisible {
                index: 1,
                visible: true,
            })
            .unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"command":"play_cue","cue":"Whoosh2","delay_ms":600}"#,
                r#"{"command":"set_strike_visible","index":1,"visible":true}"#,
            ]
        );
    }

    #[test]
    fn cue_keys_are_asset_names() {
        let mut presenter = JsonLinesPresenter::new(Vec::new());
        presenter
            .present(&PresentationCommand::cue(CueId::IncorrectAnswer))
            .unwrap();
        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains(r#""cue":"Buzzer""#));
    }
}

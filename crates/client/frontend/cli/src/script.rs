//! Headless front-end that replays producer commands from text.
//!
//! One command per line in the same syntax the command parser accepts
//! (`select 3`, `answer 2 on`, `score red +1`, ...). Blank lines and lines
//! starting with `#` are skipped.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use client_bootstrap::Frontend;
use feud_core::ProducerCommand;
use feud_runtime::Controller;

use crate::state::{describe_command, describe_event};

/// Replays a script against the controller and reports what happened.
pub struct ScriptFrontend<R, W> {
    source: R,
    out: W,
    keep_going: bool,
}

impl ScriptFrontend<Box<dyn BufRead>, io::Stdout> {
    /// Read commands from `path`, or stdin when the path is `-`.
    pub fn open(path: &Path) -> Result<Self> {
        let source: Box<dyn BufRead> = if path == Path::new("-") {
            Box::new(io::stdin().lock())
        } else {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        };
        Ok(Self::new(source, io::stdout()))
    }
}

impl<R: BufRead, W: Write> ScriptFrontend<R, W> {
    pub fn new(source: R, out: W) -> Self {
        Self {
            source,
            out,
            keep_going: false,
        }
    }

    /// Report rejected lines and continue instead of stopping at the first.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> Frontend for ScriptFrontend<R, W> {
    fn run(&mut self, controller: &mut Controller) -> Result<()> {
        let mut failures = 0usize;
        let mut executed = 0usize;
        let mut line = String::new();
        let mut number = 0usize;

        loop {
            line.clear();
            if self.source.read_line(&mut line).context("failed to read script")? == 0 {
                break;
            }
            number += 1;
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let result = text
                .parse::<ProducerCommand>()
                .map_err(anyhow::Error::from)
                .and_then(|command| {
                    controller
                        .dispatch(&command)
                        .map_err(anyhow::Error::from)
                });

            match result {
                Ok(outcome) => {
                    executed += 1;
                    writeln!(self.out, "> {text}")?;
                    for event in &outcome.events {
                        writeln!(self.out, "  {}", describe_event(event, controller.store()))?;
                    }
                    for command in &outcome.commands {
                        writeln!(self.out, "    -> {}", describe_command(command))?;
                    }
                }
                Err(err) => {
                    failures += 1;
                    tracing::warn!(line = number, error = %err, "script line rejected");
                    writeln!(self.out, "! line {number}: `{text}`: {err}")?;
                    if !self.keep_going {
                        self.out.flush()?;
                        bail!("script stopped at line {number}: {err}");
                    }
                }
            }
        }
        self.out.flush()?;

        tracing::info!(executed, failures, "script finished");
        if failures > 0 {
            bail!("{failures} script line(s) were rejected");
        }
        Ok(())
    }
}

//! Interactive session: dispatches parsed commands to the queue
//! controller and lets the renderer redraw after each one.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use crossbeam_channel::Receiver;
use ringqueue::{MediaTransport, QueueController, QueueEvent};
use tracing::{debug, warn};

use crate::command::{Command, HELP, ParseError};
use crate::ingest::collect_media;
use crate::render::ConsoleRenderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<T: MediaTransport> {
    controller: QueueController<T>,
    renderer: ConsoleRenderer,
    events: Receiver<QueueEvent>,
}

impl<T: MediaTransport> App<T> {
    pub fn new(controller: QueueController<T>, renderer: ConsoleRenderer) -> Self {
        let events = controller.subscribe();
        Self {
            controller,
            renderer,
            events,
        }
    }

    pub fn controller(&self) -> &QueueController<T> {
        &self.controller
    }

    /// Ingests files and directories, returns the number of entries added.
    pub fn add_paths(&mut self, paths: &[PathBuf]) -> Result<usize> {
        let items = collect_media(paths)?;
        let count = items.len();
        self.controller.on_media_added(items)?;
        Ok(count)
    }

    /// Parses and runs one input line. Errors are reported on `out` and
    /// never end the session.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "Command received");
        let flow = match self.handle(command, out) {
            Ok(flow) => flow,
            Err(err) => {
                warn!(error = %err, "Command failed");
                writeln!(out, "error: {err:#}")?;
                Flow::Continue
            }
        };

        self.redraw(out)?;
        Ok(flow)
    }

    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        let len = self.controller.playlist().len();

        match command {
            Command::List => self.renderer.render(out, &self.controller)?,
            Command::Dump => {
                let json = serde_json::to_string_pretty(&self.controller.queue_view())?;
                writeln!(out, "{json}")?;
            }
            Command::Play(None) => {
                if !self.controller.play()? {
                    writeln!(out, "nothing to play")?;
                }
            }
            Command::Play(Some(index)) => {
                if !self.controller.select_by_index(index)? {
                    writeln!(out, "no row {}", index + 1)?;
                }
            }
            Command::Pause => self.controller.pause()?,
            Command::Stop => self.controller.stop()?,
            Command::Next => {
                if !self.controller.advance()? {
                    writeln!(out, "the queue is empty")?;
                }
            }
            Command::Prev => {
                if !self.controller.retreat()? {
                    writeln!(out, "the queue is empty")?;
                }
            }
            Command::Ended => {
                if !self.controller.on_playback_ended()? && self.controller.auto_advance() {
                    writeln!(out, "the queue is empty")?;
                }
            }
            Command::Delete(index) => {
                if !self.controller.delete_by_index(index)? {
                    writeln!(out, "no row {}", index + 1)?;
                }
            }
            Command::MoveUp(index) => {
                if !self.controller.move_up(index)? {
                    report_unmoved(out, index, len)?;
                }
            }
            Command::MoveDown(index) => {
                if !self.controller.move_down(index)? {
                    report_unmoved(out, index, len)?;
                }
            }
            Command::Add(paths) => {
                let added = self.add_paths(&paths)?;
                writeln!(out, "{added} entries added")?;
            }
            Command::Title(name) => self.controller.set_title(&name),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Redraws when the controller reported changes since the last call.
    pub fn redraw<W: Write>(&mut self, out: &mut W) -> Result<bool> {
        Ok(self.renderer.drain(&self.events, &self.controller, out)? > 0)
    }
}

fn report_unmoved<W: Write>(out: &mut W, index: usize, len: usize) -> std::io::Result<()> {
    if index >= len {
        writeln!(out, "no row {}", index + 1)
    } else {
        writeln!(out, "row {} is already at the edge", index + 1)
    }
}

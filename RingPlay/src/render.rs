//! Console renderer.
//!
//! Read-only observer of the queue controller: it drains the event bus
//! after each user action and redraws the queue and the rotated
//! "up next" strip when anything changed.

use std::io::{self, Write};

use crossbeam_channel::Receiver;
use ringqueue::{MediaTransport, QueueController, QueueEvent, QueueRow, QueueView};

pub struct ConsoleRenderer {
    up_next_size: usize,
}

impl ConsoleRenderer {
    pub fn new(up_next_size: usize) -> Self {
        Self { up_next_size }
    }

    /// Full queue from the head, rows numbered from 1, current one marked.
    pub fn render_queue<W: Write>(&self, out: &mut W, view: &QueueView) -> io::Result<()> {
        if view.is_empty() {
            return writeln!(out, "== {} (empty) ==", view.title);
        }

        writeln!(out, "== {} ({}) ==", view.title, view.len())?;
        for row in &view.rows {
            let marker = if row.is_current { "▶ " } else { "  " };
            writeln!(
                out,
                "{marker}{}. {} ({})",
                row.position + 1,
                row.display_name,
                row.kind
            )?;
        }
        Ok(())
    }

    pub fn render_up_next<W: Write>(&self, out: &mut W, rows: &[QueueRow]) -> io::Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let names: Vec<String> = rows
            .iter()
            .map(|row| {
                if row.is_current {
                    format!("▶ {}", row.display_name)
                } else {
                    row.display_name.clone()
                }
            })
            .collect();
        writeln!(out, "Up next: {}", names.join(" | "))
    }

    pub fn render<T: MediaTransport, W: Write>(
        &self,
        out: &mut W,
        controller: &QueueController<T>,
    ) -> io::Result<()> {
        self.render_queue(out, &controller.queue_view())?;
        self.render_up_next(out, &controller.up_next(self.up_next_size))
    }

    /// Consumes pending events, prints their status lines and redraws once.
    ///
    /// Returns the number of events handled.
    pub fn drain<T: MediaTransport, W: Write>(
        &self,
        events: &Receiver<QueueEvent>,
        controller: &QueueController<T>,
        out: &mut W,
    ) -> io::Result<usize> {
        let mut handled = 0;
        for event in events.try_iter() {
            handled += 1;
            match event {
                QueueEvent::MediaLoaded { name, kind } => writeln!(out, "loaded {name} ({kind})")?,
                QueueEvent::PlaybackStarted { name, .. } => writeln!(out, "▶ playing {name}")?,
                QueueEvent::PlaybackPaused => writeln!(out, "⏸ paused")?,
                QueueEvent::PlaybackStopped => writeln!(out, "⏹ stopped")?,
                QueueEvent::QueueChanged | QueueEvent::TitleChanged(_) => {}
            }
        }

        if handled > 0 {
            self.render(out, controller)?;
        }
        Ok(handled)
    }
}

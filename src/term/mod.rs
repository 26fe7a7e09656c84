//! Term module - raw-mode terminal session and snapshot drawing.
//!
//! `TerminalSession` owns terminal state (raw mode, alternate screen) and
//! guarantees restore on exit; `GameView` turns a snapshot into queued draw
//! commands without touching the terminal itself.

pub mod view;

pub use view::GameView;

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;

/// A raw-mode terminal session with buffered drawing.
pub struct TerminalSession {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed partway.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame. Full redraw; the board is small enough that diffing
    /// is not worth the bookkeeping.
    pub fn draw(&mut self, view: &GameView, snap: &GameSnapshot) -> Result<()> {
        self.buf.clear();
        view.encode_into(snap, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

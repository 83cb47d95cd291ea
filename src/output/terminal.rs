//! In-place terminal drawing.
//!
//! The display animates by overwriting itself: each frame is written with
//! every line behind an erase-line sequence, then the cursor is moved back up
//! to the frame's first line so the next draw lands on top of it. A full
//! screen clear at the start of every draw resets whatever an earlier, taller
//! frame may have left below.

use std::io::{self, Write};

/// Erase the whole screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Erase from the cursor to the end of the line.
pub const CLEAR_LINE: &str = "\x1b[K";

/// Move the cursor up `lines` rows.
pub fn cursor_up(lines: usize) -> String {
    format!("\x1b[{lines}A")
}

/// Write a transient status line: erase the line, write, park the cursor at
/// the line start so the next write overwrites it.
pub fn status_line(out: &mut dyn Write, text: &str) -> io::Result<()> {
    write!(out, "{CLEAR_LINE}{text}\r")?;
    out.flush()
}

/// Draws frames in place, remembering how tall the last one was.
#[derive(Debug, Default)]
pub struct Painter {
    last_height: usize,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height in lines of the most recently drawn frame.
    pub fn last_height(&self) -> usize {
        self.last_height
    }

    /// Put `frame` on screen, overwriting whatever the previous draw left.
    ///
    /// Sequence: clear the screen, write each frame line behind an erase-line
    /// sequence, then move the cursor back up by the frame's height. Drawing
    /// the same frame twice produces byte-identical output.
    pub fn draw(&mut self, out: &mut dyn Write, frame: &str) -> io::Result<()> {
        write!(out, "{CLEAR_SCREEN}")?;

        let mut height = 0;
        for line in frame.lines() {
            writeln!(out, "{CLEAR_LINE}{line}")?;
            height += 1;
        }

        if height > 0 {
            write!(out, "{}\r", cursor_up(height))?;
        }
        out.flush()?;

        self.last_height = height;
        Ok(())
    }
}

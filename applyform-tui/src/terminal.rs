use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal,
};

use crate::render::{Line, Tone};

/// Raw-mode alternate-screen terminal. Restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait for terminal events.
    ///
    /// Blocks until at least one event arrives when `timeout` is `None`, then
    /// drains whatever else is pending.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                true
            }
        };

        if has_event {
            if events.is_empty() {
                events.push(event::read()?);
            }
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Redraw the whole screen with `lines`, clipped to the terminal height.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (_, height) = terminal::size()?;

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;

        for (y, line) in lines.iter().take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            for span in &line.spans {
                queue!(self.stdout, SetForegroundColor(tone_color(span.style.tone)))?;
                if span.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if span.style.reverse {
                    queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
                }
                queue!(
                    self.stdout,
                    Print(&span.text),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => Color::Reset,
        Tone::Muted => Color::DarkGrey,
        Tone::Accent => Color::Cyan,
        Tone::Error => Color::Red,
        Tone::Success => Color::Green,
    }
}

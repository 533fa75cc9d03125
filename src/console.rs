use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{Attribute, SetAttribute},
    terminal,
};
use lifegrid::{Grid, Pos2};
use std::io;

pub enum ConsoleCommand {
    Exit,
    PlayPause,
    Clear,
    Randomize,
    ToggleCell(Pos2),
    Handled,
}

/// Raw-mode terminal UI: draws the grid every tick and maps key presses to
/// [`ConsoleCommand`]s for the driver loop to apply.
///
/// Owns a cell cursor that the arrow keys move around the grid.
pub struct ConsoleUi {
    width: i32,
    height: i32,
    cursor: Pos2,
    footer: String,
}
impl ConsoleUi {
    pub fn new(width: i32, height: i32) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            width,
            height,
            cursor: Pos2::default(),
            footer: String::new(),
        })
    }

    fn glyph(grid: &Grid, pos: Pos2) -> &'static str {
        if grid.get(pos) { "\u{2588}" } else { "\u{00b7}" }
    }

    pub fn render(&self, grid: &Grid, running: bool) -> io::Result<()> {
        // a grid larger than the terminal would wrap and scribble, so only
        // the region that fits gets drawn
        let (term_cols, term_rows) = terminal::size()?;
        let (vis_w, vis_h) = visible_extent(grid.width(), grid.height(), term_cols, term_rows);

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for y in 0..vis_h {
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            for x in 0..vis_w {
                let glyph = Self::glyph(grid, Pos2::new(x, y));
                io::Write::write_all(&mut stdout, glyph.as_bytes())?;
            }
        }

        // redraw the cell under the cursor inverted
        if self.cursor.x < vis_w && self.cursor.y < vis_h {
            queue!(
                stdout,
                cursor::MoveTo(self.cursor.x as u16, self.cursor.y as u16),
                SetAttribute(Attribute::Reverse),
            )?;
            io::Write::write_all(&mut stdout, Self::glyph(grid, self.cursor).as_bytes())?;
            queue!(stdout, SetAttribute(Attribute::Reset))?;
        }

        // status footer below the visible grid
        let status = format!(
            "[{}] {} | space:run/stop c:clear r:random t:toggle q:quit",
            if running { "running" } else { "paused" },
            self.footer,
        );
        queue!(stdout, cursor::MoveTo(0, vis_h as u16))?;
        io::Write::write_all(&mut stdout, status.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure an event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let cmd = match event::read()? {
            // CTRL+C, checked before the plain 'c' clear binding
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => ConsoleCommand::Exit,
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => ConsoleCommand::Exit,
                KeyCode::Char(' ') => ConsoleCommand::PlayPause,
                KeyCode::Char('c') => ConsoleCommand::Clear,
                KeyCode::Char('r') => ConsoleCommand::Randomize,
                KeyCode::Char('t') | KeyCode::Enter => ConsoleCommand::ToggleCell(self.cursor),
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    self.move_cursor(code);
                    ConsoleCommand::Handled
                }
                _ => ConsoleCommand::Handled,
            },
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(cmd))
    }

    // the cursor stays clamped to the grid bounds
    fn move_cursor(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.cursor.y = (self.cursor.y - 1).max(0),
            KeyCode::Down => self.cursor.y = (self.cursor.y + 1).min(self.height - 1),
            KeyCode::Left => self.cursor.x = (self.cursor.x - 1).max(0),
            KeyCode::Right => self.cursor.x = (self.cursor.x + 1).min(self.width - 1),
            _ => {}
        }
    }

    pub fn set_footer(&mut self, footer: String) {
        self.footer = footer;
    }
}
impl Drop for ConsoleUi {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}

/// Clamps the drawn grid region to the terminal, reserving the last row
/// for the status footer.
fn visible_extent(grid_w: i32, grid_h: i32, term_cols: u16, term_rows: u16) -> (i32, i32) {
    (
        grid_w.min(term_cols as i32),
        grid_h.min(i32::from(term_rows.saturating_sub(1))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_extent_keeps_a_grid_that_fits() {
        assert_eq!(visible_extent(25, 25, 80, 40), (25, 25));
    }

    #[test]
    fn visible_extent_clamps_to_the_terminal() {
        // last terminal row is reserved for the footer
        assert_eq!(visible_extent(200, 100, 80, 40), (80, 39));
        assert_eq!(visible_extent(25, 25, 10, 25), (10, 24));
    }

    #[test]
    fn visible_extent_handles_a_degenerate_terminal() {
        assert_eq!(visible_extent(25, 25, 5, 0), (5, 0));
    }
}

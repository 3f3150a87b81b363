use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use std::io::{self, Write};

pub enum ConsoleCommand {
    Exit,
    Handled,
}

pub struct ConsoleRender {
    footer: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            footer: String::new(),
        })
    }

    pub fn render(&self, board: &str) -> io::Result<()> {
        let (_, rows) = terminal::size()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        // raw mode doesn't return the carriage on '\n', so every line is placed explicitly
        for (row, line) in board.lines().take(rows.saturating_sub(1) as usize).enumerate() {
            queue!(stdout, cursor::MoveTo(0, row as u16))?;
            stdout.write_all(line.as_bytes())?;
        }

        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        stdout.write_all(self.footer.as_bytes())?;

        stdout.flush()
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure an event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let command = match event::read()? {
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => ConsoleCommand::Exit,
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(command))
    }

    pub fn set_footer(&mut self, footer: String) {
        self.footer = footer;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen) {
            log::error!("failed to restore the terminal: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("failed to disable raw mode: {e}");
        }
    }
}

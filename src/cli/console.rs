//! Terminal renderer and human player

use std::io::{self, BufRead, Write};

use crate::{
    Result,
    logic::{GameOutcome, GameState, Mark, Move},
    ports::{Player, Renderer},
};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const HIGHLIGHT: &str = "\x1b[1;7m";
const RESET: &str = "\x1b[0m";

/// Draws the board on a terminal.
///
/// ```text
///     A   B   C
///   ------------
/// 1 ┆ X │ O │
///   ┆───┼───┼───
/// 2 ┆   │ X │
///   ┆───┼───┼───
/// 3 ┆   │   │ O
/// ```
pub struct ConsoleRenderer {
    out: Box<dyn Write>,
    clear_screen: bool,
}

impl ConsoleRenderer {
    /// Render to stdout, clearing the screen before each frame
    pub fn new() -> Self {
        Self {
            out: Box::new(io::stdout()),
            clear_screen: true,
        }
    }

    /// Render to any writer without clearing
    pub fn with_writer(out: impl Write + 'static) -> Self {
        Self {
            out: Box::new(out),
            clear_screen: false,
        }
    }

    fn write_frame(&mut self, state: &GameState) -> io::Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.out, "    A   B   C")?;
        writeln!(self.out, "  ------------")?;
        for row in 0..3 {
            write!(self.out, "{} ┆", row + 1)?;
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = state.grid().cell(index).to_char();
                if col > 0 {
                    write!(self.out, "│")?;
                }
                if state.winning_cells().contains(&index) {
                    write!(self.out, " {HIGHLIGHT}{symbol}{RESET} ")?;
                } else {
                    write!(self.out, " {symbol} ")?;
                }
            }
            writeln!(self.out)?;
            if row < 2 {
                writeln!(self.out, "  ┆───┼───┼───")?;
            }
        }

        match state.outcome() {
            Some(GameOutcome::Win(mark)) => writeln!(self.out, "\n{mark} wins \u{1F973}")?,
            Some(GameOutcome::Tie) => writeln!(self.out, "\nNo one wins this time \u{1F633}")?,
            None => {}
        }
        self.out.flush()
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, state: &GameState) -> Result<()> {
        self.write_frame(state).map_err(|source| crate::Error::Io {
            operation: "render board".to_string(),
            source,
        })
    }
}

/// Turn a coordinate such as `A1` or `3c` into a cell index.
///
/// Columns are the letters A-C, rows the digits 1-3, in either order.
pub fn grid_to_index(input: &str) -> Option<usize> {
    let upper = input.trim().to_ascii_uppercase();
    let [a, b] = upper.as_bytes() else {
        return None;
    };
    let (letter, digit) = match (a, b) {
        (b'A'..=b'C', b'1'..=b'3') => (*a, *b),
        (b'1'..=b'3', b'A'..=b'C') => (*b, *a),
        _ => return None,
    };
    let col = usize::from(letter - b'A');
    let row = usize::from(digit - b'1');
    Some(row * 3 + col)
}

/// Where a console player reads its moves from
enum Input {
    /// Process stdin, locked only for the duration of each read so several
    /// players can share it
    Stdin(io::Stdin),
    Reader(Box<dyn BufRead>),
}

impl Input {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read_line(buf),
            Input::Reader(reader) => reader.read_line(buf),
        }
    }
}

/// Human player typing coordinates at a prompt.
///
/// Unreadable coordinates and occupied cells are reported and asked for
/// again; only running out of input ends the turn with an error.
pub struct ConsolePlayer {
    mark: Mark,
    input: Input,
    output: Box<dyn Write>,
}

impl ConsolePlayer {
    /// Read from stdin and prompt on stdout
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            input: Input::Stdin(io::stdin()),
            output: Box::new(io::stdout()),
        }
    }

    pub fn with_io(mark: Mark, input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            mark,
            input: Input::Reader(Box::new(input)),
            output: Box::new(output),
        }
    }

    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{}'s move: ", self.mark)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|source| crate::Error::Io {
            operation: "write to console".to_string(),
            source,
        })
    }
}

impl Player for ConsolePlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        while !state.game_over() {
            let line = self
                .prompt()
                .map_err(|source| crate::Error::Io {
                    operation: "read move from console".to_string(),
                    source,
                })?
                .ok_or_else(|| crate::Error::Io {
                    operation: "read move from console".to_string(),
                    source: io::ErrorKind::UnexpectedEof.into(),
                })?;

            let Some(index) = grid_to_index(&line) else {
                self.say("Please provide coordinates in the form of A1 or 1A")?;
                continue;
            };
            match state.make_move_to(index) {
                Ok(mv) => return Ok(Some(mv)),
                Err(crate::Error::CellOccupied { .. }) => {
                    self.say("That cell is already occupied.")?;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(None)
    }
}

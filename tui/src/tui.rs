//! Drawing the game in the terminal.

use crate::args::Args;
use crate::chart::History;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::error::Error;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;
use toruslife_lib::{Game, Generation, TurnHook};

/// How many turns of history the status sparklines keep.
const CHART_TURNS: usize = 50;

/// How long to wait for a key while paused or finished.
const IDLE_POLL: Duration = Duration::from_millis(500);

const ALIVE_CHAR: char = 'o';
const DEAD_CHAR: char = '.';

/// The raw-mode alternate screen; restores the terminal when dropped.
struct Screen {
    out: Stdout,
}

impl Screen {
    fn new() -> Result<Self, Box<dyn Error>> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Screen { out })
    }

    /// Redraws the whole screen: status bar, board, key-hint bar.
    ///
    /// Lines of the board run along the x axis, so `x` picks the screen row
    /// and `y` the column. Boards larger than the terminal are clipped.
    fn draw(
        &mut self,
        game: &Game,
        generation: &Generation,
        history: &History,
        status: &str,
    ) -> Result<(), Box<dyn Error>> {
        let (cols, rows) = terminal::size()?;
        queue!(self.out, Clear(ClearType::All))?;

        let top = format!(
            "Turn: {}  Live: {} {}  Changed: {} {}",
            game.turns(),
            game.live_count(),
            history.live_sparkline(),
            game.changed(),
            history.changed_sparkline(),
        );
        queue!(self.out, MoveTo(0, 0), Print(clip(&top, cols)))?;

        let size = generation.size();
        let board_rows = size.width.min(i32::from(rows.saturating_sub(2)));
        let board_cols = size.height.min(i32::from(cols));
        for x in 0..board_rows {
            let line: String = (0..board_cols)
                .map(|y| {
                    if generation.is_live((x, y)) {
                        ALIVE_CHAR
                    } else {
                        DEAD_CHAR
                    }
                })
                .collect();
            queue!(self.out, MoveTo(0, x as u16 + 1), Print(line))?;
        }

        queue!(
            self.out,
            MoveTo(0, rows.saturating_sub(1)),
            Print(clip(status, cols))
        )?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        let _ = terminal::disable_raw_mode();
    }
}

fn clip(text: &str, cols: u16) -> String {
    text.chars().take(cols as usize).collect()
}

/// Runs the game in the interactive screen.
///
/// Turn pacing comes from the input-poll timeout, so a keypress is handled
/// immediately and the next turn happens at most one tick later.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut game = args.config.game()?;
    let mut history = History::new(CHART_TURNS);
    let mut screen = Screen::new()?;
    let mut paused = false;

    loop {
        let idle = paused || game.over();
        let status = if game.over() {
            format!(
                "Game over, total turns {}. Press [q] to quit.",
                game.turns()
            )
        } else if paused {
            String::from("Paused. Press [space] to resume, [q] to quit.")
        } else {
            String::from("Running. Press [space] to pause, [q] to quit.")
        };
        screen.draw(&game, game.current(), &history, &status)?;

        let wait = if idle { IDLE_POLL } else { args.tick };
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char(' ') => paused = !paused,
                        _ => {}
                    }
                }
            }
            continue;
        }

        if !idle {
            game.turn()?;
            history.push(game.live_count(), game.changed());
            if args.max_turns > 0 && game.turns() >= args.max_turns {
                break;
            }
        }
    }
    Ok(())
}

/// Runs the game without a screen, printing one line per turn.
///
/// The per-turn line goes through the game's turn hook, so it reports the
/// new generation at the moment it is handed over.
pub fn run_headless(args: &Args) -> Result<(), Box<dyn Error>> {
    let hook: TurnHook = Box::new(|game, generation| {
        println!(
            "turn {:5}  live {:5}  changed {:5}",
            game.turns(),
            generation.live(),
            game.changed()
        );
    });
    let mut game = args.config.game_with_hook(hook)?;

    while !game.over() && (args.max_turns == 0 || game.turns() < args.max_turns) {
        game.turn()?;
    }

    if game.over() {
        println!("Game over, total turns {}.", game.turns());
    } else {
        println!("Stopped after {} turns.", game.turns());
    }
    Ok(())
}

//! The turn-by-turn game driver.

use crate::{error::Error, generation::Generation, source::Source};

/// A hook invoked once per completed turn.
///
/// It receives the game, whose counters already reflect the finished turn,
/// and the freshly built generation, which the game has *not yet* adopted as
/// current. This call is the intended hand-off point for a renderer: once it
/// returns, the game replaces its current generation with the new one.
pub type TurnHook = Box<dyn FnMut(&Game, &Generation)>;

/// Drives a board turn by turn until it dies out or stops changing.
///
/// A game starts running and stays running while turns keep changing the
/// board; it ends permanently on the first turn that leaves no cell
/// alive (extinction) or changes nothing (stagnation). A stagnant board
/// includes every still life; oscillators of period 2 and up keep changing
/// cells every turn and are deliberately not detected as over.
///
/// Turns must be driven serially from one caller.
pub struct Game {
    current: Generation,
    turns: u32,
    live_count: usize,
    changed_count: usize,
    over: bool,
    hook: Option<TurnHook>,
}

impl Game {
    /// Creates a game whose first generation is filled from `source`.
    pub fn new(source: Source<'_>) -> Self {
        let current = Generation::new(source);
        let live_count = current.live();
        Game {
            current,
            turns: 0,
            live_count,
            changed_count: 0,
            over: false,
            hook: None,
        }
    }

    /// Creates a game that invokes `hook` once per completed turn.
    pub fn with_hook(source: Source<'_>, hook: TurnHook) -> Self {
        let mut game = Game::new(source);
        game.hook = Some(hook);
        game
    }

    /// Advances the game by one generation.
    ///
    /// Fails with [`Error::GameOverError`] once the game has ended; the
    /// failure is permanent for this game, so the caller must stop driving
    /// the loop.
    pub fn turn(&mut self) -> Result<(), Error> {
        if self.over {
            return Err(Error::GameOverError);
        }

        self.turns += 1;

        let next = Generation::new(Source::Next(&self.current));

        self.live_count = next.live();
        self.changed_count = self.current.changed(&next);
        self.over = self.live_count == 0 || self.changed_count == 0;

        // The hook sees the updated counters while `current` still holds
        // the previous generation.
        if let Some(mut hook) = self.hook.take() {
            hook(self, &next);
            self.hook = Some(hook);
        }

        self.current = next;

        Ok(())
    }

    /// Whether the game has ended. Once true, it never reverts.
    #[inline]
    pub const fn over(&self) -> bool {
        self.over
    }

    /// Number of completed turns.
    #[inline]
    pub const fn turns(&self) -> u32 {
        self.turns
    }

    /// Number of live cells after the last completed turn.
    ///
    /// Before the first turn, the live count of the first generation.
    #[inline]
    pub const fn live_count(&self) -> usize {
        self.live_count
    }

    /// Number of cells the last completed turn changed.
    #[inline]
    pub const fn changed(&self) -> usize {
        self.changed_count
    }

    /// The current generation.
    #[inline]
    pub const fn current(&self) -> &Generation {
        &self.current
    }
}

//! Rolling history of per-turn counts.

use std::collections::VecDeque;

const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A fixed-capacity record of the last turns' live and changed counts,
/// oldest first. Once full, pushing a new turn drops the oldest one.
pub struct History {
    cap: usize,
    live: VecDeque<usize>,
    changed: VecDeque<usize>,
}

impl History {
    /// Creates an empty history keeping the last `cap` turns.
    pub fn new(cap: usize) -> Self {
        History {
            cap,
            live: VecDeque::with_capacity(cap),
            changed: VecDeque::with_capacity(cap),
        }
    }

    /// Records the counts of one completed turn.
    pub fn push(&mut self, live: usize, changed: usize) {
        if self.live.len() == self.cap {
            self.live.pop_front();
            self.changed.pop_front();
        }
        self.live.push_back(live);
        self.changed.push_back(changed);
    }

    /// The live counts drawn as a one-line sparkline.
    pub fn live_sparkline(&self) -> String {
        sparkline(&self.live)
    }

    /// The changed counts drawn as a one-line sparkline.
    pub fn changed_sparkline(&self) -> String {
        sparkline(&self.changed)
    }
}

/// Scales the values against their maximum and maps them to block glyphs.
fn sparkline(values: &VecDeque<usize>) -> String {
    let max = values.iter().copied().max().unwrap_or(0).max(1);
    values
        .iter()
        .map(|&v| GLYPHS[v * (GLYPHS.len() - 1) / max])
        .collect()
}

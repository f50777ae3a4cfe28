//! Starting-player selection.

use super::common::Mark;
use rand::Rng;

/// Source of fair coin flips used to pick who starts each game.
pub trait CoinFlip {
    /// Pick the mark that moves first.
    fn flip(&mut self) -> Mark;
}

/// Coin backed by a random number generator.
///
/// Build one per process and reuse it for every game; the generator is
/// seeded exactly once, when it is handed in here.
pub struct RandomCoin<R> {
    rng: R,
}

impl<R: Rng> RandomCoin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CoinFlip for RandomCoin<R> {
    fn flip(&mut self) -> Mark {
        if self.rng.random() {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// Coin that replays a fixed sequence of results, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedCoin<const K: usize> {
    script: [Mark; K],
    next: usize,
}

impl<const K: usize> ScriptedCoin<K> {
    pub fn new(script: [Mark; K]) -> Self {
        Self { script, next: 0 }
    }
}

impl<const K: usize> CoinFlip for ScriptedCoin<K> {
    fn flip(&mut self) -> Mark {
        if K == 0 {
            return Mark::X;
        }
        let mark = self.script[self.next % K];
        self.next += 1;
        mark
    }
}

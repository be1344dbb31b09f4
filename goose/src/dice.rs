use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

/// A source of dice rolls, used when a move doesn't name its dice.
pub trait DiceRoller {
    /// Returns a uniformly distributed value in `min..=max`.
    fn roll(&mut self, min: u8, max: u8) -> u8;
}

/// Rolls with operating system entropy.
///
/// If the operating system can't provide randomness, the thread-local
/// generator from `rand` is used instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDice;

impl DiceRoller for SystemDice {
    fn roll(&mut self, min: u8, max: u8) -> u8 {
        let mut seed = [0u8; 32];
        match OsRng.try_fill_bytes(&mut seed) {
            Ok(()) => StdRng::from_seed(seed).gen_range(min..=max),
            Err(_) => rand::thread_rng().gen_range(min..=max),
        }
    }
}

/// Reproducible rolls from a seed.
#[derive(Clone, Debug)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceRoller for SeededDice {
    fn roll(&mut self, min: u8, max: u8) -> u8 {
        self.rng.gen_range(min..=max)
    }
}

impl<D: DiceRoller + ?Sized> DiceRoller for Box<D> {
    fn roll(&mut self, min: u8, max: u8) -> u8 {
        (**self).roll(min, max)
    }
}

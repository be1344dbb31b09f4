use std::fmt;

use itertools::Itertools;

use crate::{Space, WIN_SPACE};

/// The result of a command that was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// All registered players, in the order they were added.
    Players(Vec<String>),
    Started,
    Moved(MoveReport),
}

/// What happened during one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub name: String,
    pub dice: (u8, u8),
    /// Where the player was before rolling.
    pub from: u32,
    /// Where the dice took the player, before any special space had an effect.
    pub to: u32,
    pub effect: Effect,
}

/// The effect of the space a move ended on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Win,
    Bridge { to: u32 },
    /// One entry per jump, in order. Never empty.
    Goose { jumps: Vec<u32> },
    Bounce { to: u32 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Players(names) => write!(f, "players: {}", names.iter().join(", ")),
            Outcome::Started => write!(f, "Start"),
            Outcome::Moved(report) => write!(f, "{}", report),
        }
    }
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        let (dice1, dice2) = self.dice;
        // An overshoot is reported as reaching the winning space first.
        let to = match self.effect {
            Effect::Bounce { .. } => WIN_SPACE,
            _ => self.to,
        };
        write!(
            f,
            "{} rolls {}, {}. {} moves from {} to {}",
            name,
            dice1,
            dice2,
            name,
            Space(self.from),
            Space(to)
        )?;
        match &self.effect {
            Effect::None => Ok(()),
            Effect::Win => write!(f, ". {} Wins!!", name),
            Effect::Bridge { to } => write!(f, ". {} jumps to {}", name, to),
            Effect::Goose { jumps } => jumps.iter().try_for_each(|position| {
                write!(f, ", The Goose. {} moves again and goes to {}", name, position)
            }),
            // "Pippo" is how this has always been printed, whoever bounces.
            Effect::Bounce { to } => write!(f, ". {} bounces! Pippo returns to {}", name, to),
        }
    }
}

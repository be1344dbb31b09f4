use itertools::Itertools;

/// The error type for [`Game::execute()`](crate::Game::execute), i.e. for a
/// command that was rejected.
///
/// Rejected commands never change the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalCommand {
    UnknownCommand,
    GameOver,
    PlayerAlreadyExists { name: String },
    GameAlreadyStarted { name: String },
    NotEnoughPlayers,
    UnregisteredPlayer { name: String },
    /// Lists only the dice that are out of range.
    InvalidDice { name: String, values: Vec<u8> },
}

impl std::error::Error for IllegalCommand {}

impl std::fmt::Display for IllegalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalCommand::UnknownCommand => write!(f, "unknown command"),
            IllegalCommand::GameOver => write!(f, "We have a winner. The game is over!"),
            IllegalCommand::PlayerAlreadyExists { name } => {
                write!(f, "{}: already existing player", name)
            }
            IllegalCommand::GameAlreadyStarted { name } => {
                write!(f, "Cannot add {}. The game has already started.", name)
            }
            IllegalCommand::NotEnoughPlayers => write!(f, "There is no enough participants"),
            IllegalCommand::UnregisteredPlayer { name } => {
                write!(f, "Cannot move {}. The player is not registered", name)
            }
            IllegalCommand::InvalidDice { name, values } => write!(
                f,
                "Cannot move {}. Incorrect dice value{} {}",
                name,
                if values.len() > 1 { "s" } else { "" },
                values.iter().join(", ")
            ),
        }
    }
}

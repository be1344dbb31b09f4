pub use board::*;
pub use command::*;
pub use dice::*;
pub use errors::*;
pub use game::*;
pub use outcome::*;
pub use player::*;

mod board;
mod command;
mod dice;
mod errors;
mod game;
mod outcome;
mod player;

mod io;
mod recording;
mod session;
pub use io::*;
pub use recording::*;
pub use session::*;

use goose::DiceRoller;

pub struct Config {
    pub dice: Box<dyn DiceRoller>,
    pub recorder: Option<recording::Recorder>,
}

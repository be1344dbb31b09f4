use std::fmt;

/// The space a player has to reach exactly to win.
pub const WIN_SPACE: u32 = 63;
/// Landing here sends the player forward to [`BRIDGE_JUMP_TO`].
pub const BRIDGE_SPACE: u32 = 6;
pub const BRIDGE_JUMP_TO: u32 = 12;
/// Landing on one of these moves the player again by the same amount.
pub const GOOSE_SPACES: [u32; 6] = [5, 9, 14, 18, 23, 27];

pub const DICE_MIN: u8 = 1;
pub const DICE_MAX: u8 = 6;

pub fn is_goose(position: u32) -> bool {
    GOOSE_SPACES.contains(&position)
}

/// A board position as it is shown to players.
///
/// Some spaces have names, all others are shown by their index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Space(pub u32);

impl Space {
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Start"),
            BRIDGE_SPACE => Some("The Bridge"),
            _ => None,
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.0),
        }
    }
}

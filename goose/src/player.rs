/// A participant and the two most recent positions they held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    previous_position: u32,
    current_position: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            previous_position: 0,
            current_position: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_position(&self) -> u32 {
        self.current_position
    }

    pub fn previous_position(&self) -> u32 {
        self.previous_position
    }

    /// Moves forward by the sum of both dice.
    pub fn move_by(&mut self, dice1: u8, dice2: u8) {
        self.previous_position = self.current_position;
        self.current_position += u32::from(dice1) + u32::from(dice2);
    }

    /// Puts the player on `position`, remembering where they came from.
    pub fn reposition(&mut self, position: u32) {
        self.previous_position = self.current_position;
        self.current_position = position;
    }
}

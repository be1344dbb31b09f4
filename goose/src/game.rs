use crate::{
    is_goose, Command, DiceRoller, Effect, IllegalCommand, MoveReport, Outcome, Player, SystemDice,
    BRIDGE_JUMP_TO, BRIDGE_SPACE, DICE_MAX, DICE_MIN, WIN_SPACE,
};

/// The state of one game, driven by text commands.
///
/// The game is not meant to be shared: a host that processes commands from
/// several threads must hold a lock around each call to [`Game::process()`].
#[derive(Clone, Debug)]
pub struct Game<D = SystemDice> {
    // In the order they were added. Names are unique.
    players: Vec<Player>,
    has_started: bool,
    has_winner: bool,
    dice: D,
}

impl Game<SystemDice> {
    pub fn new() -> Self {
        Self::with_dice(SystemDice)
    }
}

impl Default for Game<SystemDice> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DiceRoller> Game<D> {
    pub fn with_dice(dice: D) -> Self {
        Self {
            players: Vec::new(),
            has_started: false,
            has_winner: false,
            dice,
        }
    }

    /// Executes one line of input and describes the result.
    ///
    /// Rejected commands are described too, so this always produces a
    /// response line.
    pub fn process(&mut self, line: &str) -> String {
        match self.execute(line) {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Like [`Game::process()`], but returns the typed result.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, IllegalCommand> {
        if self.has_winner {
            return Err(IllegalCommand::GameOver);
        }

        match Command::parse(line) {
            Command::AddPlayer(name) => self.add_player(name),
            Command::Start => self.start(),
            Command::Move { name, dice } => {
                let (dice1, dice2) = match dice {
                    Some(dice) => dice,
                    None => (
                        self.dice.roll(DICE_MIN, DICE_MAX),
                        self.dice.roll(DICE_MIN, DICE_MAX),
                    ),
                };
                self.move_player(name, dice1, dice2)
                    .map(Outcome::Moved)
            }
            Command::Unknown => Err(IllegalCommand::UnknownCommand),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    fn add_player(&mut self, name: String) -> Result<Outcome, IllegalCommand> {
        if self.player(&name).is_some() {
            return Err(IllegalCommand::PlayerAlreadyExists { name });
        }
        if self.has_started {
            return Err(IllegalCommand::GameAlreadyStarted { name });
        }

        self.players.push(Player::new(&name));
        Ok(Outcome::Players(
            self.players
                .iter()
                .map(|player| String::from(player.name()))
                .collect(),
        ))
    }

    /// Starting again once the game is running is accepted.
    fn start(&mut self) -> Result<Outcome, IllegalCommand> {
        if self.players.len() <= 1 {
            return Err(IllegalCommand::NotEnoughPlayers);
        }
        self.has_started = true;
        Ok(Outcome::Started)
    }

    fn move_player(
        &mut self,
        name: String,
        dice1: u8,
        dice2: u8,
    ) -> Result<MoveReport, IllegalCommand> {
        let Some(player_idx) = self.players.iter().position(|p| p.name() == name) else {
            return Err(IllegalCommand::UnregisteredPlayer { name });
        };
        let values: Vec<u8> = [dice1, dice2]
            .into_iter()
            .filter(|value| !(DICE_MIN..=DICE_MAX).contains(value))
            .collect();
        if !values.is_empty() {
            return Err(IllegalCommand::InvalidDice { name, values });
        }

        let player = &mut self.players[player_idx];
        player.move_by(dice1, dice2);
        let from = player.previous_position();
        let to = player.current_position();

        let effect = if to == WIN_SPACE {
            self.has_winner = true;
            Effect::Win
        } else if to == BRIDGE_SPACE {
            player.reposition(BRIDGE_JUMP_TO);
            Effect::Bridge { to: BRIDGE_JUMP_TO }
        } else if is_goose(to) {
            let mut jumps = Vec::new();
            while is_goose(player.current_position()) {
                let delta = player.current_position() - player.previous_position();
                let position = player.current_position() + delta;
                player.reposition(position);
                jumps.push(position);
            }
            Effect::Goose { jumps }
        } else if to > WIN_SPACE {
            let position = WIN_SPACE - (to - WIN_SPACE);
            player.reposition(position);
            Effect::Bounce { to: position }
        } else {
            Effect::None
        };

        Ok(MoveReport {
            name,
            dice: (dice1, dice2),
            from,
            to,
            effect,
        })
    }
}

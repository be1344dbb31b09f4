use goose::{DiceRoller, Game};
use tracing::{debug, info};

use crate::io::{LineSink, LineSource};
use crate::recording::Recorder;
use crate::Config;

pub const WELCOME_MESSAGE: &str = "Welcome to the Goose Game. Enter your command:";
/// Ends the session. Compared exactly, case included.
pub const STOP_WORD: &str = "Stop!";

/// Feeds lines from a source to a game and writes the responses to a sink.
pub struct GameSession<S, W> {
    game: Game<Box<dyn DiceRoller>>,
    source: S,
    sink: W,
    recorder: Option<Recorder>,
}

impl<S: LineSource, W: LineSink> GameSession<S, W> {
    pub fn new(config: Config, source: S, sink: W) -> Self {
        Self {
            game: Game::with_dice(config.dice),
            source,
            sink,
            recorder: config.recorder,
        }
    }

    /// Runs until the stop word is read, and returns the exit code.
    ///
    /// Returns an error only on IO failure, not when a command is rejected.
    /// Running out of input before the stop word counts as an IO failure.
    /// The transcript, if any, is written either way.
    pub fn run(&mut self) -> anyhow::Result<i32> {
        info!("Session started");
        let played = self.play();
        let recorded = match &self.recorder {
            Some(recorder) => recorder.write_transcript(),
            None => Ok(()),
        };
        played?;
        recorded?;
        info!(
            players = self.game.players().len(),
            has_winner = self.game.has_winner(),
            "Session stopped"
        );
        Ok(0)
    }

    fn play(&mut self) -> anyhow::Result<()> {
        self.sink.write_line(WELCOME_MESSAGE)?;

        loop {
            let Some(line) = self.source.read_line()? else {
                anyhow::bail!("Input ended before the stop word {:?}", STOP_WORD);
            };
            if line == STOP_WORD {
                return Ok(());
            }

            let response = match self.game.execute(&line) {
                Ok(outcome) => {
                    debug!(command = %line, ?outcome, "Command executed");
                    outcome.to_string()
                }
                Err(err) => {
                    debug!(command = %line, %err, "Command rejected");
                    err.to_string()
                }
            };
            if let Some(recorder) = &mut self.recorder {
                recorder.store_exchange(&line, &response);
            }
            self.sink.write_line(&response)?;
        }
    }

    pub fn game(&self) -> &Game<Box<dyn DiceRoller>> {
        &self.game
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use goose::{SeededDice, SystemDice};

    use super::*;
    use crate::io::{ReaderSource, WriterSink};

    fn config() -> Config {
        Config {
            dice: Box::new(SystemDice),
            recorder: None,
        }
    }

    fn play(config: Config, input: impl AsRef<[u8]>) -> (anyhow::Result<i32>, Vec<String>) {
        let mut session = GameSession::new(
            config,
            ReaderSource::new(input.as_ref()),
            WriterSink::new(Vec::new()),
        );
        let result = session.run();
        let output = String::from_utf8(session.into_sink().into_inner()).unwrap();
        (result, output.lines().map(String::from).collect())
    }

    #[test]
    fn plays_a_game() {
        let input = [
            "add player Pippo",
            "add player Pluto",
            " ",
            "move Pippo 2, 4", // bridge to 12
            "move Pluto 2, 3", // goose to 10
            "move Pippo 6, 6",
            "move Pluto 1, 1",
            "move Pippo 6, 6",
            "move Pluto 1, 1", // goose to 16
            "move Pippo 6, 6",
            "move Pluto 1, 1",
            "move Pippo 6, 6",
            "move Pluto 1, 2",
            "move Pippo 2, 1", // Pippo wins
            "move Pluto 1, 1",
            "Stop!",
            "add player Pino",
        ]
        .join("\n");
        let (result, output) = play(config(), &input);
        assert_eq!(result.unwrap(), 0);
        assert_eq!(
            output,
            [
                "Welcome to the Goose Game. Enter your command:",
                "players: Pippo",
                "players: Pippo, Pluto",
                "Start",
                "Pippo rolls 2, 4. Pippo moves from Start to The Bridge. Pippo jumps to 12",
                "Pluto rolls 2, 3. Pluto moves from Start to 5, The Goose. Pluto moves again and goes to 10",
                "Pippo rolls 6, 6. Pippo moves from 12 to 24",
                "Pluto rolls 1, 1. Pluto moves from 10 to 12",
                "Pippo rolls 6, 6. Pippo moves from 24 to 36",
                "Pluto rolls 1, 1. Pluto moves from 12 to 14, The Goose. Pluto moves again and goes to 16",
                "Pippo rolls 6, 6. Pippo moves from 36 to 48",
                "Pluto rolls 1, 1. Pluto moves from 16 to 18, The Goose. Pluto moves again and goes to 20",
                "Pippo rolls 6, 6. Pippo moves from 48 to 60",
                "Pluto rolls 1, 2. Pluto moves from 20 to 23, The Goose. Pluto moves again and goes to 26",
                "Pippo rolls 2, 1. Pippo moves from 60 to 63. Pippo Wins!!",
                "We have a winner. The game is over!",
            ]
        );
    }

    #[test]
    fn rejected_commands_do_not_end_the_session() {
        let (result, output) = play(config(), "hello\n \nadd player Pippo\nStop!\n");
        assert_eq!(result.unwrap(), 0);
        assert_eq!(
            &output[1..],
            ["unknown command", "There is no enough participants", "players: Pippo"]
        );
    }

    #[test]
    fn stop_word_is_case_sensitive() {
        let (result, output) = play(config(), "stop!\nStop! \nStop!\n");
        assert_eq!(result.unwrap(), 0);
        assert_eq!(&output[1..], ["unknown command", "unknown command"]);
    }

    #[test]
    fn missing_stop_word_is_an_error() {
        let (result, output) = play(config(), "add player Pippo\n");
        assert!(result.is_err());
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn invalid_utf8_is_an_ordinary_line() {
        let input = b"add player Pippo\nadd player \xff\xfe\nmove \xff\nadd player Pluto\nStop!\n";
        let (result, output) = play(config(), input);
        assert_eq!(result.unwrap(), 0);
        assert_eq!(
            &output[1..],
            [
                "players: Pippo",
                "players: Pippo, \u{fffd}\u{fffd}",
                "Cannot move \u{fffd}. The player is not registered",
                "players: Pippo, \u{fffd}\u{fffd}, Pluto",
            ]
        );
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let input = "add player Pippo\nadd player Pluto\n \nmove Pippo\nmove Pluto\nmove Pippo\nStop!\n";
        let seeded = || Config {
            dice: Box::new(SeededDice::new(1234)),
            recorder: None,
        };
        let (_, first) = play(seeded(), input);
        let (_, second) = play(seeded(), input);
        assert_eq!(first, second);
    }

    #[test]
    fn records_the_session() {
        let path = std::env::temp_dir().join(format!(
            "goose_game_session_{}.json",
            std::process::id()
        ));
        let config = Config {
            dice: Box::new(SystemDice),
            recorder: Some(Recorder::new(path.clone()).unwrap()),
        };
        let (result, _) = play(config, "add player Pippo\nnonsense\nStop!\n");
        assert_eq!(result.unwrap(), 0);

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let transcript: crate::Transcript = serde_json::from_str(&written).unwrap();
        assert_eq!(transcript.exchanges.len(), 2);
        assert_eq!(transcript.exchanges[0].command, "add player Pippo");
        assert_eq!(transcript.exchanges[1].response, "unknown command");
    }

    #[test]
    fn records_the_session_when_input_ends_early() {
        let path = std::env::temp_dir().join(format!(
            "goose_game_unfinished_session_{}.json",
            std::process::id()
        ));
        let config = Config {
            dice: Box::new(SystemDice),
            recorder: Some(Recorder::new(path.clone()).unwrap()),
        };
        let (result, _) = play(config, "add player Pippo\nadd player Pluto\n");
        assert!(result.is_err());

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let transcript: crate::Transcript = serde_json::from_str(&written).unwrap();
        assert_eq!(transcript.exchanges.len(), 2);
        assert_eq!(transcript.exchanges[1].response, "players: Pippo, Pluto");
    }
}

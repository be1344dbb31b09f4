const ADD_PLAYER_KEYWORD: &str = "add player ";
const MOVE_KEYWORD: &str = "move ";
const START_COMMAND: &str = " ";

/// A line of input, recognized as one of the supported commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddPlayer(String),
    Start,
    /// The dice are `None` when the player wants them rolled for them.
    ///
    /// Values are single digits, but not necessarily valid dice values.
    Move {
        name: String,
        dice: Option<(u8, u8)>,
    },
    Unknown,
}

impl Command {
    /// Recognizes a command.
    ///
    /// The shapes can overlap, so they are tried in a fixed order: add player,
    /// start, move.
    pub fn parse(line: &str) -> Command {
        if let Some(name) = find_argument(line, ADD_PLAYER_KEYWORD) {
            return Command::AddPlayer(String::from(name));
        }

        if line == START_COMMAND {
            return Command::Start;
        }

        if let Some(argument) = find_argument(line, MOVE_KEYWORD) {
            let (name, dice) = split_dice(argument);
            return Command::Move {
                name: String::from(name),
                dice,
            };
        }

        Command::Unknown
    }
}

/// Finds the leftmost case-insensitive occurrence of `keyword` that is
/// followed by a non-empty, single-line remainder, and returns that remainder.
fn find_argument<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    // ASCII lowercasing keeps byte offsets intact.
    let lowercase = line.to_ascii_lowercase();
    lowercase
        .match_indices(keyword)
        .map(|(idx, _)| &line[idx + keyword.len()..])
        .map(|rest| rest.strip_suffix('\n').unwrap_or(rest))
        .find(|rest| !rest.is_empty() && !rest.contains('\n'))
}

/// Splits `"<name> <d1>, <d2>"` into the name and the two digits.
///
/// If the line doesn't end with a dice pair, all of it is the name.
fn split_dice(argument: &str) -> (&str, Option<(u8, u8)>) {
    match dice_suffix_start(argument.as_bytes()) {
        Some((name_end, dice)) => (&argument[..name_end], Some(dice)),
        None => (argument, None),
    }
}

fn dice_suffix_start(bytes: &[u8]) -> Option<(usize, (u8, u8))> {
    let (&last, rest) = bytes.split_last()?;
    let dice2 = digit(last)?;

    let comma_end = skip_whitespace_backwards(rest)?;
    let (&comma, rest) = rest[..comma_end].split_last()?;
    if comma != b',' {
        return None;
    }
    let (&first, rest) = rest.split_last()?;
    let dice1 = digit(first)?;

    let name_end = skip_whitespace_backwards(rest)?;
    // The name can't be empty. When everything in front of the dice is
    // whitespace, one whitespace character becomes the name.
    let name_end = if name_end > 0 {
        name_end
    } else if rest.len() >= 2 {
        1
    } else {
        return None;
    };
    Some((name_end, (dice1, dice2)))
}

/// Returns the index where the trailing run of whitespace in `bytes` begins,
/// or `None` if there is no trailing whitespace.
fn skip_whitespace_backwards(bytes: &[u8]) -> Option<usize> {
    let start = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |idx| idx + 1);
    (start < bytes.len()).then_some(start)
}

fn digit(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}

use super::betting::Betting;
use super::key::Key;
use crate::N_BOARD;
use crate::N_HOLE;
use crate::N_RANKS;
use crate::N_SEATS;
use crate::N_SUITS;
use crate::SweepError;
use std::path::Path;

/// Default game definition, relative to the working directory.
pub const GAME_PATH: &str = "games/holdem.nolimit.2p.reverse_blinds.game";

/// A validated ACPC game definition.
///
/// Per-round lists (`blind` excepted, which is per-player) are indexed by
/// betting round. `firstPlayer` is stored one-indexed, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    betting: Betting,
    players: usize,
    rounds: usize,
    hole: usize,
    suits: usize,
    ranks: usize,
    stack: Vec<u32>,
    blind: Vec<u32>,
    raise: Vec<u32>,
    first: Vec<u32>,
    max_raises: Vec<u32>,
    board: Vec<u32>,
}

impl Game {
    /// Heads-up no-limit hold'em with reverse blinds.
    pub fn holdem() -> Self {
        Self {
            betting: Betting::NoLimit,
            players: 2,
            rounds: 4,
            hole: 2,
            suits: 4,
            ranks: 13,
            stack: vec![20000, 20000],
            blind: vec![100, 50],
            raise: vec![],
            first: vec![2, 1, 1, 1],
            max_raises: vec![],
            board: vec![0, 3, 1, 1],
        }
    }

    /// Read and validate a game definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SweepError> {
        let path = path.as_ref();
        log::debug!("{:<32}{:<32}", "loading game", path.display());
        std::fs::read_to_string(path)
            .map_err(|source| SweepError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .parse()
    }

    pub fn betting(&self) -> Betting {
        self.betting
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn stack(&self) -> &[u32] {
        &self.stack
    }
    pub fn blind(&self) -> &[u32] {
        &self.blind
    }
    /// Index of the final betting round, where showdowns happen.
    pub fn river(&self) -> usize {
        self.rounds - 1
    }
    /// Community cards dealt by the start of each round.
    pub fn dealt(&self, round: usize) -> usize {
        self.board.iter().take(round + 1).sum::<u32>() as usize
    }

    fn set(&mut self, key: Key, values: Vec<u32>) -> Result<(), String> {
        if key.is_scalar() && values.len() != 1 {
            return Err(format!("{} takes a single value", key));
        }
        let scalar = values.first().copied().unwrap_or_default() as usize;
        match key {
            Key::Stack => self.stack = values,
            Key::Blind => self.blind = values,
            Key::RaiseSize => self.raise = values,
            Key::FirstPlayer => self.first = values,
            Key::MaxRaises => self.max_raises = values,
            Key::NumBoardCards => self.board = values,
            Key::NumRounds => self.rounds = scalar,
            Key::NumPlayers => self.players = scalar,
            Key::NumHoleCards => self.hole = scalar,
            Key::NumSuits => self.suits = scalar,
            Key::NumRanks => self.ranks = scalar,
        }
        Ok(())
    }

    /// Reject any definition the sweep cannot deal.
    fn validate(&self) -> Result<(), SweepError> {
        let unsupported = |reason: String| Err(SweepError::Unsupported(reason));
        if self.players != N_SEATS {
            return unsupported(format!("{} players, need {}", self.players, N_SEATS));
        }
        if self.hole != N_HOLE {
            return unsupported(format!("{} hole cards, need {}", self.hole, N_HOLE));
        }
        if self.suits != N_SUITS || self.ranks != N_RANKS {
            return unsupported(format!(
                "{} suits x {} ranks, need {} x {}",
                self.suits, self.ranks, N_SUITS, N_RANKS
            ));
        }
        if self.rounds == 0 {
            return unsupported("no betting rounds".to_string());
        }
        if self.board.len() != self.rounds {
            return unsupported(format!(
                "{} numBoardCards entries for {} rounds",
                self.board.len(),
                self.rounds
            ));
        }
        if let Some(n) = self.board.iter().find(|n| **n as usize > N_BOARD) {
            return unsupported(format!("{} board cards in one round, need at most {}", n, N_BOARD));
        }
        if self.dealt(self.river()) != N_BOARD {
            return unsupported(format!(
                "{} board cards, need {}",
                self.dealt(self.river()),
                N_BOARD
            ));
        }
        if self.blind.len() != self.players {
            return unsupported(format!("{} blinds for {} players", self.blind.len(), self.players));
        }
        if self.betting == Betting::NoLimit && self.stack.len() != self.players {
            return unsupported(format!("{} stacks for {} players", self.stack.len(), self.players));
        }
        if self.betting == Betting::Limit && self.raise.len() != self.rounds {
            return unsupported(format!("{} raise sizes for {} rounds", self.raise.len(), self.rounds));
        }
        for (name, list) in [("firstPlayer", &self.first), ("maxRaises", &self.max_raises)] {
            if !list.is_empty() && list.len() != self.rounds {
                return unsupported(format!("{} {} entries for {} rounds", list.len(), name, self.rounds));
            }
        }
        if let Some(p) = self.first.iter().find(|p| **p == 0 || **p as usize > self.players) {
            return unsupported(format!("first player {} out of range", p));
        }
        Ok(())
    }

    fn empty() -> Self {
        Self {
            betting: Betting::default(),
            players: 0,
            rounds: 0,
            hole: 0,
            suits: 0,
            ranks: 0,
            stack: vec![],
            blind: vec![],
            raise: vec![],
            first: vec![],
            max_raises: vec![],
            board: vec![],
        }
    }
}

impl std::str::FromStr for Game {
    type Err = SweepError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut game = Self::empty();
        let mut open = false;
        for (i, raw) in s.lines().enumerate() {
            let line = i + 1;
            let parse = |reason: String| SweepError::Parse { line, reason };
            let text = raw.split_once('#').map_or(raw, |(text, _)| text).trim();
            if text.is_empty() {
                continue;
            }
            if text.eq_ignore_ascii_case("GAMEDEF") {
                open = true;
                continue;
            }
            if !open {
                return Err(parse(format!("expected GAMEDEF, found {}", text)));
            }
            if text.eq_ignore_ascii_case("END GAMEDEF") {
                game.validate()?;
                return Ok(game);
            }
            if let Ok(betting) = Betting::try_from(text) {
                game.betting = betting;
                continue;
            }
            let (key, values) = text
                .split_once('=')
                .ok_or_else(|| parse(format!("expected key = values, found {}", text)))?;
            let key = key.trim();
            let values = values
                .split_whitespace()
                .map(str::parse::<u32>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| parse(format!("{}: {}", key, e)))?;
            match Key::try_from(key) {
                Ok(key) => game.set(key, values).map_err(parse)?,
                Err(e) => log::warn!("{:<32}{:<32}", "ignoring game line", e),
            }
        }
        Err(SweepError::Parse {
            line: s.lines().count(),
            reason: "missing END GAMEDEF".to_string(),
        })
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let join = |xs: &[u32]| {
            xs.iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(f, "GAMEDEF")?;
        writeln!(f, "{}", self.betting)?;
        writeln!(f, "{} = {}", Key::NumPlayers, self.players)?;
        writeln!(f, "{} = {}", Key::NumRounds, self.rounds)?;
        for (key, list) in [
            (Key::Stack, &self.stack),
            (Key::Blind, &self.blind),
            (Key::RaiseSize, &self.raise),
            (Key::FirstPlayer, &self.first),
            (Key::MaxRaises, &self.max_raises),
        ] {
            if !list.is_empty() {
                writeln!(f, "{} = {}", key, join(list))?;
            }
        }
        writeln!(f, "{} = {}", Key::NumSuits, self.suits)?;
        writeln!(f, "{} = {}", Key::NumRanks, self.ranks)?;
        writeln!(f, "{} = {}", Key::NumHoleCards, self.hole)?;
        writeln!(f, "{} = {}", Key::NumBoardCards, join(&self.board))?;
        write!(f, "END GAMEDEF")
    }
}

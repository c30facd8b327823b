/// Recognized `key = values` entries of a game definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Stack,
    Blind,
    RaiseSize,
    FirstPlayer,
    MaxRaises,
    NumRounds,
    NumPlayers,
    NumHoleCards,
    NumSuits,
    NumRanks,
    NumBoardCards,
}

impl Key {
    /// keys holding exactly one value
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Key::NumRounds
                | Key::NumPlayers
                | Key::NumHoleCards
                | Key::NumSuits
                | Key::NumRanks
        )
    }
}

impl TryFrom<&str> for Key {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "stack" => Ok(Key::Stack),
            "blind" => Ok(Key::Blind),
            "raisesize" => Ok(Key::RaiseSize),
            "firstplayer" => Ok(Key::FirstPlayer),
            "maxraises" => Ok(Key::MaxRaises),
            "numrounds" => Ok(Key::NumRounds),
            "numplayers" => Ok(Key::NumPlayers),
            "numholecards" => Ok(Key::NumHoleCards),
            "numsuits" => Ok(Key::NumSuits),
            "numranks" => Ok(Key::NumRanks),
            "numboardcards" => Ok(Key::NumBoardCards),
            _ => Err(format!("unknown key: {}", s)),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Key::Stack => "stack",
            Key::Blind => "blind",
            Key::RaiseSize => "raiseSize",
            Key::FirstPlayer => "firstPlayer",
            Key::MaxRaises => "maxRaises",
            Key::NumRounds => "numRounds",
            Key::NumPlayers => "numPlayers",
            Key::NumHoleCards => "numHoleCards",
            Key::NumSuits => "numSuits",
            Key::NumRanks => "numRanks",
            Key::NumBoardCards => "numBoardCards",
        };
        write!(f, "{}", name)
    }
}

/// Betting structure of the game definition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Betting {
    #[default]
    Limit,
    NoLimit,
}

impl TryFrom<&str> for Betting {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "limit" => Ok(Betting::Limit),
            "nolimit" => Ok(Betting::NoLimit),
            _ => Err(format!("invalid betting type: {}", s)),
        }
    }
}

impl std::fmt::Display for Betting {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Betting::Limit => write!(f, "limit"),
            Betting::NoLimit => write!(f, "nolimit"),
        }
    }
}

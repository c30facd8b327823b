use crate::cards::Hole;

/// Suit relationship of a starting hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Category {
    Suited,
    Pair,
    Offsuit,
}

impl Category {
    /// Conventional label, high rank first: `AA`, `AKs`, `AKo`.
    pub fn label(hole: &Hole) -> String {
        let hi = hole.hi().rank();
        let lo = hole.lo().rank();
        match Self::from(*hole) {
            Category::Pair => format!("{}{}", hi, lo),
            Category::Suited => format!("{}{}s", hi, lo),
            Category::Offsuit => format!("{}{}o", hi, lo),
        }
    }
}

impl From<Hole> for Category {
    fn from(hole: Hole) -> Self {
        let [lo, hi] = hole.cards();
        if lo.rank() == hi.rank() {
            Category::Pair
        } else if lo.suit() == hi.suit() {
            Category::Suited
        } else {
            Category::Offsuit
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::Suited => write!(f, "suited"),
            Category::Pair => write!(f, "pair"),
            Category::Offsuit => write!(f, "offsuit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Category::label(&Hole::try_from("Ah As").unwrap()), "AA");
        assert_eq!(Category::label(&Hole::try_from("Kh Ah").unwrap()), "AKs");
        assert_eq!(Category::label(&Hole::try_from("2h 7s").unwrap()), "72o");
    }

    #[test]
    fn categories() {
        assert_eq!(Category::from(Hole::try_from("9c 9d").unwrap()), Category::Pair);
        assert_eq!(Category::from(Hole::try_from("9c Tc").unwrap()), Category::Suited);
        assert_eq!(Category::from(Hole::try_from("9c Td").unwrap()), Category::Offsuit);
    }
}

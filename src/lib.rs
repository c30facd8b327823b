//! Exhaustive heads-up preflop equity.
//!
//! For one fixed opponent hole pair and each of the 169 canonical starting
//! hands, every five-card board from the residual 48-card deck is dealt,
//! both seats are ranked, and the showdown is tallied as a win, loss or tie.
pub mod cards;
pub mod catalog;
pub mod error;
pub mod game;
pub mod showdown;
pub mod sweep;

#[cfg(feature = "cli")]
pub mod driver;

pub use error::SweepError;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Integer showdown rank. Higher wins, equal ties.
pub type Score = u32;
/// Share of the pot won by a hand, ties counted as half.
pub type Equity = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// DECK GEOMETRY
// ============================================================================
/// Ranks per suit (2 through Ace).
pub const N_RANKS: usize = 13;
/// Suits per rank.
pub const N_SUITS: usize = 4;
/// Cards in a full deck.
pub const N_CARDS: usize = N_RANKS * N_SUITS;
/// Hole cards dealt to each seat.
pub const N_HOLE: usize = 2;
/// Seats at the table.
pub const N_SEATS: usize = 2;
/// Cards in play before the board is dealt.
pub const N_DEAD: usize = N_HOLE * N_SEATS;
/// Cards left to deal the board from.
pub const N_RESIDUAL: usize = N_CARDS - N_DEAD;
/// Community cards on a complete board.
pub const N_BOARD: usize = 5;

// ============================================================================
// ENUMERATION SIZES
// ============================================================================
/// Boards per catalog entry, C(48, 5).
pub const N_BOARDS: usize = choose(N_RESIDUAL, N_BOARD);
/// Suited starting hands, one per unordered pair of distinct ranks.
pub const N_SUITED: usize = choose(N_RANKS, 2);
/// Pocket pairs, one per rank.
pub const N_PAIRS: usize = N_RANKS;
/// Offsuit starting hands, one per unordered pair of distinct ranks.
pub const N_OFFSUIT: usize = choose(N_RANKS, 2);
/// Canonical starting hands.
pub const N_HANDS: usize = N_SUITED + N_PAIRS + N_OFFSUIT;
/// Dense result records for a full catalog sweep.
pub const N_RECORDS: usize = N_HANDS * N_BOARDS;

const _: () = assert!(N_RESIDUAL == 48);
const _: () = assert!(N_BOARDS == 1_712_304);
const _: () = assert!(N_HANDS == N_RANKS * N_RANKS);
const _: () = assert!(N_RECORDS == 289_379_376);

/// Binomial coefficient C(n, k) by the multiplicative formula.
pub const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut x = 1;
    let mut i = 0;
    while i < k {
        x = x * (n - i) / (i + 1);
        i += 1;
    }
    x
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

use crate::N_HANDS;
use crate::game::GAME_PATH;
use crate::sweep::Mode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Exhaustive heads-up preflop equity", long_about = None)]
pub struct Args {
    /// ACPC game definition
    #[arg(long, default_value = GAME_PATH)]
    pub game: PathBuf,
    /// opponent hole cards
    #[arg(long, default_value = "Qd Td")]
    pub opponent: String,
    #[arg(long, value_enum, default_value_t = Mode::Parallel)]
    pub mode: Mode,
    /// worker threads in parallel mode
    #[arg(long, default_value_t = num_cpus::get())]
    pub threads: usize,
    /// sweep only the first n catalog entries
    #[arg(long, default_value_t = N_HANDS)]
    pub hands: usize,
    /// keep every showdown in the dense result buffer
    #[arg(long)]
    pub capture: bool,
    /// write a JSON summary here
    #[arg(long)]
    pub json: Option<PathBuf>,
    /// write the binary result buffer here; implies --capture
    #[arg(long)]
    pub dump: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["sweeper"]).unwrap();
        assert_eq!(args.game, PathBuf::from(GAME_PATH));
        assert_eq!(args.opponent, "Qd Td");
        assert_eq!(args.mode, Mode::Parallel);
        assert_eq!(args.hands, N_HANDS);
        assert!(!args.capture);
        assert!(args.dump.is_none());
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "sweeper",
            "--mode",
            "sequential",
            "--opponent",
            "Ac Kc",
            "--hands",
            "3",
            "--dump",
            "out.bin",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Sequential);
        assert_eq!(args.opponent, "Ac Kc");
        assert_eq!(args.hands, 3);
        assert_eq!(args.dump, Some(PathBuf::from("out.bin")));
        assert!(Args::try_parse_from(["sweeper", "--mode", "gpu"]).is_err());
    }
}

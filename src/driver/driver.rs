use super::args::Args;
use crate::SweepError;
use crate::cards::Hole;
use crate::catalog::Catalog;
use crate::catalog::Category;
use crate::game::Game;
use crate::sweep::Summary;
use crate::sweep::Sweep;
use clap::Parser;
use std::time::Instant;

/// Parse the command line and sweep.
pub fn run() -> anyhow::Result<()> {
    execute(Args::parse())
}

/// Load the game, sweep the catalog against the opponent, report.
///
/// Every configuration problem surfaces here before the first board is
/// dealt.
pub fn execute(args: Args) -> anyhow::Result<()> {
    let game = Game::load(&args.game)?;
    let opponent = Hole::try_from(args.opponent.as_str()).map_err(SweepError::Notation)?;
    let catalog = Catalog::canonical().take(args.hands);
    let sweep = Sweep::new(&game, &catalog, opponent)?;
    let capture = args.capture || args.dump.is_some();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()?;
    log::info!("{:<32}{:<32}", "opponent", opponent);
    log::info!("{:<32}{:<32}", "threads", pool.current_num_threads());
    let start = Instant::now();
    let report = pool.install(|| sweep.run(args.mode, capture))?;
    let elapsed = start.elapsed();
    for (hole, tally) in catalog.iter().zip(report.tallies()) {
        log::info!("{:<6}{:<8}{}", Category::label(hole), hole.to_string(), tally);
    }
    let total = report.total();
    log::info!("{:<32}{:<32}", "player wins", total.wins());
    log::info!("{:<32}{:<32}", "opponent wins", total.losses());
    log::info!("{:<32}{:<32}", "ties", total.ties());
    log::info!("{:<32}{:<32}", "combinations", total.total());
    log::info!("{:<32}{:<32}", "calc took", format!("{:.3?}", elapsed));
    if let Some(ref path) = args.json {
        Summary::new(
            &catalog,
            opponent,
            &report,
            args.mode,
            pool.current_num_threads(),
            elapsed,
        )
        .save(path)?;
    }
    if let Some(ref path) = args.dump {
        if let Some(buffer) = report.buffer() {
            buffer.save(path)?;
        }
    }
    Ok(())
}

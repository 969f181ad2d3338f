//! Interactive rock-paper-scissors against composable opponent
//! strategies.
//!
//! The crate splits into three layers: [`game`] holds the move model,
//! the rules that score a pair of moves, and the session bookkeeping;
//! [`strategy`] holds the villain policies and their combinators; and
//! [`console`] holds the line-oriented surface that drives a session
//! from a terminal.

pub mod console;
pub mod game;
pub mod strategy;

/// Write logs to terminal.
pub fn log() -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
}

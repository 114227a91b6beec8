use anyhow::{Result, bail};
use tracing::info;

use tritac_cli::Game;
use tritac_core::Side;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let human = match std::env::args().nth(1).as_deref() {
        None | Some("x" | "X") => Side::X,
        Some("o" | "O") => Side::O,
        Some(other) => bail!("unknown side {other:?}, expected X or O"),
    };

    info!(%human, "tritac starting");
    Game::new(human).run()?;
    Ok(())
}

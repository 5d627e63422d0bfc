//! plank - a drag-and-drop project tracker for the terminal.

use anyhow::Result;
use plank_config::Config;
use plank_tui::App;
use plank_tui::terminal::{self, AppTerminal};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    terminal::install_panic_hook();
    let mut term = terminal::setup_terminal()?;

    let result = run(&config, &mut term).await;

    // Restore the terminal whether the app succeeded or not
    terminal::restore_terminal(&mut term)?;

    result
}

async fn run(config: &Config, term: &mut AppTerminal) -> Result<()> {
    let mut app = App::new(config)?;
    app.run(term).await?;
    Ok(())
}

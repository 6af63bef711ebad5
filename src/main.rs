use anyhow::Result;
use clap::Parser;
use neon_snake::app::App;
use neon_snake::game::GameConfig;
use neon_snake::scores::FileHighScoreStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "neon-snake")]
#[command(version, about = "Terminal Snake with bonus food and a persistent high score")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: usize,

    /// Milliseconds between logic ticks
    #[arg(long, default_value = "150")]
    tick_ms: u64,

    /// File the high score is persisted to
    #[arg(long, default_value = "neon-snake.highscore")]
    high_score_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tick_ms: cli.tick_ms,
        ..GameConfig::new(cli.width, cli.height)
    };
    let store = FileHighScoreStore::new(cli.high_score_file);

    let mut app = App::new(config, Box::new(store));
    app.run().await
}

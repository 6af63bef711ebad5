use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::scores::{HighScoreStore, HighScoreTracker};

/// Owns the game state and drives the two clocks: a fixed logic tick and a
/// faster render tick, so drawing stays smooth regardless of game speed
pub struct App {
    engine: GameEngine,
    state: GameState,
    scores: HighScoreTracker,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl App {
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>) -> Self {
        let renderer = Renderer::new(config.clone());
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            scores: HighScoreTracker::new(store),
            renderer,
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());

        // Render at 30 FPS regardless of the logic tick
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick; a dead game stays frozen until restart
                _ = tick_timer.tick() => {
                    if self.state.is_alive {
                        self.update_game()?;
                    }
                }

                _ = render_timer.tick() => {
                    let now = Instant::now();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, self.scores.high_score(), now);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(dir) => {
                    if self.state.is_alive {
                        // Latched until the next tick; a later press wins
                        self.pending_direction = Some(dir);
                    } else {
                        // Directional input doubles as the restart trigger
                        self.reset_game();
                    }
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) -> Result<()> {
        let steer = self.pending_direction.take();
        let result = self.engine.step(&mut self.state, steer, Instant::now());

        if result.points > 0 {
            self.scores.record(self.state.score)?;
        }

        Ok(())
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.pending_direction = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }

    #[cfg(test)]
    fn state(&self) -> &GameState {
        &self.state
    }
}

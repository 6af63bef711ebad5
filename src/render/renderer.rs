use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

use crate::game::{GameConfig, GameState, Position};

/// Draws the game state to the terminal; holds no state of its own beyond
/// the config knobs it needs for the bonus countdown
pub struct Renderer {
    config: GameConfig,
}

impl Renderer {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, high_score: u32, now: Instant) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, high_score, now);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_alive {
            let grid = self.render_grid(game_area, state, now);
            frame.render_widget(grid, game_area);
        } else {
            let game_over = self.render_game_over(game_area, state, high_score);
            frame.render_widget(game_over, game_area);
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState, now: Instant) -> Paragraph<'_> {
        let flash_cell = state
            .flash
            .filter(|f| f.is_visible(now))
            .map(|f| f.pos);
        let bonus_cell = state.bonus_food.map(|b| b.pos);

        let mut lines = Vec::new();

        for y in 0..state.grid_height {
            let mut spans = Vec::new();

            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if flash_cell == Some(pos) {
                    // Consumption flash outshines whatever sits underneath
                    Span::styled(
                        "✶ ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if bonus_cell == Some(pos) {
                    Span::styled(
                        "◆ ",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if pos == state.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, high_score: u32, now: Instant) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(high_score.to_string(), Style::default().fg(Color::White)),
        ];

        if let Some(bonus) = &state.bonus_food {
            let remaining = self
                .config
                .bonus_duration()
                .saturating_sub(now.duration_since(bonus.spawned_at));
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Bonus: ", Style::default().fg(Color::Magenta)));
            spans.push(Span::styled(
                format!("{:.1}s", remaining.as_secs_f64()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        _area: Rect,
        state: &GameState,
        high_score: u32,
    ) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(high_score.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "any arrow key",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

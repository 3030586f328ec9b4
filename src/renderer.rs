use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, WIN_SCORE};
use crate::entities::{self, Enemy, GameState, Outcome, Player, Projectile};
use crate::score::ScoreRecord;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    pub score: u32,
    pub player_name: &'a str,
    pub name_input: &'a str,
    pub outcome: Option<Outcome>,
    pub leaderboard: &'a [ScoreRecord],
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    /// Creates a new GameRenderer
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.game_state {
            GameState::NameEntry => self.render_name_entry(frame, view),
            GameState::Playing => self.render_game(frame, view),
            GameState::Leaderboard => self.render_leaderboard(frame, view),
        }
    }

    /// Renders the name prompt screen
    fn render_name_entry(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let prompt = vec![
            Line::from(""),
            Line::from("ENTER YOUR NAME:").centered().bold().white(),
            Line::from(""),
            Line::from(format!("{}_", view.name_input))
                .centered()
                .yellow()
                .bold(),
        ];

        let prompt_area = Rect {
            x: area.x,
            y: area.y + (area.height / 2).saturating_sub(3),
            width: area.width,
            height: 5,
        };
        frame.render_widget(
            Paragraph::new(prompt).alignment(Alignment::Center),
            prompt_area,
        );

        let hint = Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(Color::DarkGray),
        ));
        let hint_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(2),
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(hint).centered(), hint_area);
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        // Entities as filled blocks, scaled from the logical playfield
        self.fill_rect(frame, area, view.player.bounds(), Color::Green);
        for enemy in view.enemies {
            self.fill_rect(frame, area, enemy.bounds(), Color::Red);
        }
        for projectile in view.projectiles {
            self.fill_rect(frame, area, projectile.bounds(), Color::Yellow);
        }

        // Stats overlay at the top
        let stats = Line::from(vec![
            Span::styled("Player: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                view.player_name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} / {}", view.score, WIN_SCORE),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(stats), stats_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A/D or Arrows: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the end screen: outcome banner, final score, top-5 table
    fn render_leaderboard(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let banner = match view.outcome {
            Some(Outcome::Win) => Line::from("YOU WIN!").centered().green().bold(),
            _ => Line::from("GAME OVER").centered().red().bold(),
        };

        let mut text = vec![
            Line::from(""),
            banner,
            Line::from(""),
            Line::from(format!("Your score: {}", view.score))
                .centered()
                .white(),
            Line::from(""),
            Line::from("TOP 5 PLAYERS").centered().yellow().bold(),
        ];

        for (idx, record) in view.leaderboard.iter().enumerate() {
            text.push(
                Line::from(format!("{}. {} - {}", idx + 1, record.name, record.score))
                    .centered()
                    .white(),
            );
        }

        text.push(Line::from(""));
        text.push(
            Line::from("Press Space to exit")
                .centered()
                .style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(
            Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }

    /// Scales a logical rectangle to terminal cells and paints it, clipping
    /// anything above the playfield (fresh spawns) to the visible area.
    fn fill_rect(&self, frame: &mut Frame, area: Rect, bounds: entities::Rect, color: Color) {
        if let Some(cell_rect) = scale_to_cells(bounds, area) {
            frame.render_widget(Block::default().style(Style::default().bg(color)), cell_rect);
        }
    }
}

/// Maps a logical-playfield rectangle onto a terminal area. Returns None when
/// nothing of it is visible. Visible slivers round up to at least one cell.
fn scale_to_cells(bounds: entities::Rect, area: Rect) -> Option<Rect> {
    let top = bounds.top().max(0);
    if bounds.bottom() <= 0 || top >= SCREEN_HEIGHT || bounds.left() >= SCREEN_WIDTH {
        return None;
    }

    let cols = area.width as i32;
    let rows = area.height as i32;
    if cols == 0 || rows == 0 {
        return None;
    }

    let x0 = bounds.left().max(0) * cols / SCREEN_WIDTH;
    let x1 = bounds.right().min(SCREEN_WIDTH) * cols / SCREEN_WIDTH;
    let y0 = top * rows / SCREEN_HEIGHT;
    let y1 = bounds.bottom().min(SCREEN_HEIGHT) * rows / SCREEN_HEIGHT;

    let w = (x1 - x0).max(1).min(cols - x0);
    let h = (y1 - y0).max(1).min(rows - y0);
    if w <= 0 || h <= 0 {
        return None;
    }

    Some(Rect {
        x: area.x + x0 as u16,
        y: area.y + y0 as u16,
        width: w as u16,
        height: h as u16,
    })
}

use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Instant;

use crate::constants::{FRAME_BUDGET, LEADERBOARD_SIZE, MAX_NAME_LEN, SPAWN_INTERVAL, WIN_SCORE};
use crate::entities::{Direction, Enemy, GameState, Outcome, Player, Projectile};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::score::{ScoreRecord, ScoreStore};

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current session state
    pub game_state: GameState,
    /// How Playing ended; set exactly once per session
    pub outcome: Option<Outcome>,
    /// Name being typed during NameEntry
    pub name_input: String,
    /// Confirmed session name
    pub player_name: String,
    /// Player cannon
    pub player: Player,
    /// Live enemies
    pub enemies: Vec<Enemy>,
    /// Live cannon shots
    pub projectiles: Vec<Projectile>,
    /// Enemies destroyed this session
    pub score: u32,
    /// Top-5 rows fetched when the session ends
    pub leaderboard: Vec<ScoreRecord>,
    /// internal components
    last_spawn: Instant,
    store: ScoreStore,
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`] over an opened score store.
    pub fn new(store: ScoreStore) -> Self {
        Self {
            running: true,
            game_state: GameState::NameEntry,
            outcome: None,
            name_input: String::new(),
            player_name: String::new(),
            player: Player::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            leaderboard: Vec::new(),
            last_spawn: Instant::now(),
            store,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Render the frame
            terminal.draw(|frame| {
                let view = RenderView {
                    game_state: self.game_state,
                    player: &self.player,
                    enemies: &self.enemies,
                    projectiles: &self.projectiles,
                    score: self.score,
                    player_name: &self.player_name,
                    name_input: &self.name_input,
                    outcome: self.outcome,
                    leaderboard: &self.leaderboard,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and get actions
            self.input_manager.poll_events(&self.game_state)?;
            let actions = self.input_manager.get_actions(&self.game_state);

            // Process all actions
            self.process_actions(&actions);

            // Update game state
            if self.game_state == GameState::Playing {
                self.update_game()?;
            }

            // Sleep out the rest of the ~16ms frame budget
            if let Some(remaining) = FRAME_BUDGET.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        Ok(())
    }

    /// Process input actions and update game state accordingly
    pub fn process_actions(&mut self, actions: &[InputAction]) {
        // Only directions held this frame may move the cannon
        if self.game_state == GameState::Playing {
            self.player.halt();
        }

        for action in actions {
            match (self.game_state, action) {
                (_, InputAction::Quit) => {
                    self.running = false;
                }
                (GameState::NameEntry, InputAction::Char(c)) => {
                    // Non-printable input is silently ignored
                    if self.name_input.chars().count() < MAX_NAME_LEN && !c.is_control() {
                        self.name_input.push(*c);
                    }
                }
                (GameState::NameEntry, InputAction::Backspace) => {
                    self.name_input.pop();
                }
                (GameState::NameEntry, InputAction::Confirm) => {
                    if !self.name_input.is_empty() {
                        self.begin_session();
                    }
                }
                (GameState::Playing, InputAction::MoveLeft) => {
                    self.player.steer(Direction::Left);
                }
                (GameState::Playing, InputAction::MoveRight) => {
                    self.player.steer(Direction::Right);
                }
                (GameState::Playing, InputAction::Fire) => {
                    self.projectiles.push(self.player.fire());
                }
                (GameState::Leaderboard, InputAction::Confirm) => {
                    self.running = false;
                }
                _ => {}
            }
        }
    }

    /// Confirms the typed name and starts the Playing state fresh.
    fn begin_session(&mut self) {
        self.player_name = self.name_input.clone();
        self.player = Player::new();
        self.enemies.clear();
        self.projectiles.clear();
        self.score = 0;
        self.outcome = None;
        self.last_spawn = Instant::now();
        self.game_state = GameState::Playing;
    }

    /// Update game logic for one frame. The only error path is the score
    /// store failing when a terminal condition fires, which is fatal.
    pub fn update_game(&mut self) -> Result<()> {
        // Spawner tick: one enemy per interval, wall clock
        if self.last_spawn.elapsed() >= SPAWN_INTERVAL {
            self.enemies.push(Enemy::spawn(&mut rand::rng()));
            self.last_spawn = Instant::now();
        }

        // Advance all entities
        self.player.advance();
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        for enemy in &mut self.enemies {
            enemy.advance();
        }

        // Check collisions
        self.check_collisions();

        // Evict entities that left the playfield
        self.projectiles.retain(|p| !p.is_expired());
        self.enemies.retain(|e| !e.is_expired());

        // Terminal conditions, post-update state. Win is checked first: a
        // frame that both reaches the threshold and lets an enemy land wins.
        if self.score >= WIN_SCORE {
            self.finish_session(Outcome::Win)?;
        } else if self.enemies.iter().any(|e| e.has_breached()) {
            self.finish_session(Outcome::Loss)?;
        }

        Ok(())
    }

    /// Resolves (projectile, enemy) AABB pairs: each projectile claims at
    /// most one enemy per frame and vice versa, one point per pair.
    fn check_collisions(&mut self) {
        let mut projectiles_to_remove = Vec::new();
        let mut enemies_to_remove: Vec<usize> = Vec::new();

        for (p_idx, projectile) in self.projectiles.iter().enumerate() {
            let shot = projectile.bounds();
            for (e_idx, enemy) in self.enemies.iter().enumerate() {
                // Skip enemies already claimed this frame
                if enemies_to_remove.contains(&e_idx) {
                    continue;
                }
                if shot.intersects(&enemy.bounds()) {
                    projectiles_to_remove.push(p_idx);
                    enemies_to_remove.push(e_idx);
                    self.score += 1;
                    break;
                }
            }
        }

        // Remove in reverse order to avoid index issues
        projectiles_to_remove.sort_unstable();
        projectiles_to_remove.reverse();
        for idx in projectiles_to_remove {
            self.projectiles.remove(idx);
        }

        enemies_to_remove.sort_unstable();
        enemies_to_remove.reverse();
        for idx in enemies_to_remove {
            self.enemies.remove(idx);
        }
    }

    /// Persists the session and moves to the leaderboard screen.
    fn finish_session(&mut self, outcome: Outcome) -> Result<()> {
        self.store.append(&self.player_name, self.score)?;
        self.leaderboard = self.store.top_n(LEADERBOARD_SIZE)?;
        self.outcome = Some(outcome);
        self.game_state = GameState::Leaderboard;
        Ok(())
    }
}

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Fire,
    Confirm,
    Backspace,
    Char(char),
    Quit,
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
}

/// Manages input polling and translates raw key events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Creates a new InputManager with default key state
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Polls for all input events and stores one-shot actions
    /// Should be called once per frame before getting actions
    pub fn poll_events(&mut self, game_state: &GameState) -> color_eyre::Result<()> {
        // Clear previous one-shot actions
        self.oneshot_actions.clear();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event, game_state);
                }
                Event::Mouse(_) => {
                    // Mouse events currently ignored
                }
                Event::Resize(_, _) => {
                    // The renderer rescales from the frame area every draw
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Processes a key event and updates key state and one-shot actions
    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: &GameState) {
        match key_event.kind {
            KeyEventKind::Press => {
                self.handle_key_press(key_event, game_state);
            }
            KeyEventKind::Release => {
                self.handle_key_release(key_event.code);
            }
            _ => {}
        }
    }

    /// Handles key press events
    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: &GameState) {
        // Esc and Ctrl-C quit in every state. Plain letters are only quit
        // keys outside NameEntry, where they must remain typeable.
        if key_event.code == KeyCode::Esc
            || (key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        match game_state {
            GameState::NameEntry => match key_event.code {
                KeyCode::Enter => self.oneshot_actions.push(InputAction::Confirm),
                KeyCode::Backspace => self.oneshot_actions.push(InputAction::Backspace),
                KeyCode::Char(c) => self.oneshot_actions.push(InputAction::Char(c)),
                _ => {}
            },
            GameState::Playing => match key_event.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.oneshot_actions.push(InputAction::Quit);
                }
                // Fire is edge-triggered: one action per press event
                KeyCode::Char(' ') => {
                    self.oneshot_actions.push(InputAction::Fire);
                }
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                    self.key_state.left = true;
                    self.key_state.right = false;
                }
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                    self.key_state.right = true;
                    self.key_state.left = false;
                }
                _ => {}
            },
            GameState::Leaderboard => match key_event.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.oneshot_actions.push(InputAction::Quit);
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.oneshot_actions.push(InputAction::Confirm);
                }
                _ => {}
            },
        }
    }

    /// Handles key release events
    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.key_state.left = false;
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.key_state.right = false;
            }
            _ => {}
        }
    }

    /// Returns all actions for this frame (both continuous and one-shot)
    /// Must be called after poll_events()
    pub fn get_actions(&self, game_state: &GameState) -> Vec<InputAction> {
        let mut actions = Vec::new();

        // Add one-shot actions first
        actions.extend_from_slice(&self.oneshot_actions);

        // Add continuous actions based on held keys (only in Playing state)
        if *game_state == GameState::Playing {
            if self.key_state.left {
                actions.push(InputAction::MoveLeft);
            }
            if self.key_state.right {
                actions.push(InputAction::MoveRight);
            }
        }

        actions
    }
}

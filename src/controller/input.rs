//! Platform-agnostic input handling: the embedding window layer forwards
//! `InputEvent`s, the frame loop reads the folded `InputState`.

use std::collections::HashSet;

use super::physics::MoveIntent;
use crate::model::BlockType;

/// Platform-independent input events.
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),

    MouseMove { dx: f32, dy: f32 },
    MouseClick { button: MouseButton, is_down: bool },
    MouseWheel { delta_y: f32 },

    FocusLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Unified input state for one tick.
pub struct InputState {
    pub pressed_keys: HashSet<String>,
    /// Mouse deltas accumulated since the last `consume_look`.
    pub look_delta: (f32, f32),
    pub selected_block: BlockType,
    pub left_click: bool,
    pub right_click: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            look_delta: (0.0, 0.0),
            selected_block: BlockType::Dirt,
            left_click: false,
            right_click: false,
        }
    }

    /// Process an input event and update state.
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(key.clone());
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(key.as_str());
            }
            InputEvent::MouseMove { dx, dy } => {
                self.look_delta.0 += dx;
                self.look_delta.1 += dy;
            }
            InputEvent::MouseClick { button, is_down } => match button {
                MouseButton::Left => self.left_click = *is_down,
                MouseButton::Right => self.right_click = *is_down,
                MouseButton::Middle => {}
            },
            InputEvent::MouseWheel { delta_y } => {
                if *delta_y < 0.0 {
                    self.cycle_selected_block(false);
                } else if *delta_y > 0.0 {
                    self.cycle_selected_block(true);
                }
            }
            InputEvent::FocusLost => {
                self.clear_keys();
            }
        }
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    /// Take the accumulated look delta, resetting it for the next tick.
    pub fn consume_look(&mut self) -> (f32, f32) {
        let result = self.look_delta;
        self.look_delta = (0.0, 0.0);
        result
    }

    pub fn set_selected_block(&mut self, block: BlockType) {
        self.selected_block = block;
    }

    pub fn cycle_selected_block(&mut self, forward: bool) {
        let blocks = BlockType::PLACEABLE;
        let current_idx = blocks
            .iter()
            .position(|&b| b == self.selected_block)
            .unwrap_or(0);
        let next_idx = if forward {
            (current_idx + 1) % blocks.len()
        } else {
            (current_idx + blocks.len() - 1) % blocks.len()
        };
        self.selected_block = blocks[next_idx];
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Key mapping configuration.
#[derive(Clone)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub jump: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".to_string(),
            backward: "s".to_string(),
            left: "a".to_string(),
            right: "d".to_string(),
            jump: " ".to_string(),
        }
    }
}

/// Interprets raw key state through the bindings.
#[derive(Clone, Default)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn is_moving_forward(&self, input: &InputState) -> bool {
        input.is_key_pressed(&self.bindings.forward) || input.is_key_pressed("ArrowUp")
    }

    pub fn is_moving_backward(&self, input: &InputState) -> bool {
        input.is_key_pressed(&self.bindings.backward) || input.is_key_pressed("ArrowDown")
    }

    pub fn is_moving_left(&self, input: &InputState) -> bool {
        input.is_key_pressed(&self.bindings.left) || input.is_key_pressed("ArrowLeft")
    }

    pub fn is_moving_right(&self, input: &InputState) -> bool {
        input.is_key_pressed(&self.bindings.right) || input.is_key_pressed("ArrowRight")
    }

    pub fn is_jumping(&self, input: &InputState) -> bool {
        input.is_key_pressed(&self.bindings.jump)
    }

    /// Movement requests for the physics step.
    pub fn intent(&self, input: &InputState) -> MoveIntent {
        MoveIntent {
            forward: self.is_moving_forward(input),
            back: self.is_moving_backward(input),
            left: self.is_moving_left(input),
            right: self.is_moving_right(input),
            jump: self.is_jumping(input),
        }
    }

    /// Hotbar selection on the digit keys.
    pub fn block_from_key(&self, key: &str) -> Option<BlockType> {
        match key {
            "1" => Some(BlockType::Dirt),
            "2" => Some(BlockType::Stone),
            "3" => Some(BlockType::Wood),
            "4" => Some(BlockType::Grass),
            "5" => Some(BlockType::Leaves),
            _ => None,
        }
    }
}

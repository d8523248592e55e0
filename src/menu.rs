//! Menu navigation
//!
//! A vertical list of options with a wrapping cursor. Holding up/down moves
//! the cursor immediately, then repeats every `MENU_REPEAT_DELAY_TICKS`
//! frames. Confirm reports the highlighted option's action on every frame it
//! is pressed; scenes map actions to transitions or setting changes.

use crate::consts::MENU_REPEAT_DELAY_TICKS;
use crate::input::FrameInput;
use crate::render::{Align, DrawCommand, TextSize, WHITE, YELLOW};
use crate::sim::Rect;
use crate::text::{TextKey, text};

/// What selecting an option does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    OpenSettings,
    Quit,
    Resume,
    MainMenu,
    ToggleSfx,
    ToggleFullscreen,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub label: TextKey,
    pub action: MenuAction,
    /// Current value for on/off options
    pub toggle: Option<bool>,
}

impl MenuOption {
    pub fn new(label: TextKey, action: MenuAction) -> Self {
        Self {
            label,
            action,
            toggle: None,
        }
    }

    pub fn toggle(label: TextKey, action: MenuAction, value: bool) -> Self {
        Self {
            label,
            action,
            toggle: Some(value),
        }
    }

    pub fn display_text(&self) -> String {
        match self.toggle {
            Some(value) => {
                let state = if value { TextKey::On } else { TextKey::Off };
                format!("{}: {}", text(self.label), text(state))
            }
            None => text(self.label).to_string(),
        }
    }
}

/// Cursor state for one menu; scenes keep one per scene key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub current_option_index: usize,
    /// Frames left before a held direction moves the cursor again
    pub hold_delay: i32,
}

impl MenuState {
    /// Navigate and return the highlighted option's action if confirm is
    /// pressed this frame
    pub fn tick(&mut self, options: &[MenuOption], input: &FrameInput) -> Option<MenuAction> {
        debug_assert!(!options.is_empty(), "menu needs at least one option");
        if options.is_empty() {
            return None;
        }
        self.current_option_index = self.current_option_index.min(options.len() - 1);

        match input.vertical_step() {
            Some(step) => {
                self.hold_delay -= 1;
                if self.hold_delay <= 0 {
                    self.move_cursor(step, options.len());
                    self.hold_delay = MENU_REPEAT_DELAY_TICKS;
                }
            }
            None => self.hold_delay = 0,
        }

        input
            .confirm_pressed
            .then(|| options[self.current_option_index].action)
    }

    fn move_cursor(&mut self, step: i32, len: usize) {
        let len = len as i32;
        let next = self.current_option_index as i32 + step;
        self.current_option_index = if next < 0 {
            (len - 1) as usize
        } else if next >= len {
            0
        } else {
            next as usize
        };
    }

    /// Option labels stacked down the middle of the arena, highlighted option
    /// bobbing sideways
    pub fn draw(&self, options: &[MenuOption], arena: &Rect, tick_count: u64) -> Vec<DrawCommand> {
        let x = arena.center().x;
        let top = arena.top() - 340.0;
        options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let y = top - i as f32 * 56.0;
                let (bob, color) = if i == self.current_option_index {
                    ((tick_count as f32 / 6.0).sin() * 4.0, YELLOW)
                } else {
                    (0.0, WHITE)
                };
                DrawCommand::label(option.display_text(), x + bob, y, TextSize::Md, Align::Center)
                    .with_color(color)
            })
            .collect()
    }
}

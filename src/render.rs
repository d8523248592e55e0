//! Declarative draw commands
//!
//! The core decides what to draw; a `RenderSink` on the host side turns
//! commands into pixels.

use crate::sim::Rect;

/// RGB color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(231, 76, 60);
pub const YELLOW: Color = Color::rgb(241, 196, 15);
pub const DARK_BLUE: Color = Color::rgb(20, 28, 56);
pub const DARK_PURPLE: Color = Color::rgb(44, 22, 56);
pub const DARK_GREEN: Color = Color::rgb(18, 48, 34);
pub const DARK_GRAY: Color = Color::rgb(30, 30, 34);

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Xs,
    Sm,
    Md,
    Lg,
}

/// Sprite identities; resolving them to image assets is the host's job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Enemy,
    Bullet,
    ExpChip,
    Familiar,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    Solid { rect: Rect, color: Color },
    /// Sprite placement; `angle` in degrees, `tint` overrides the sprite colors
    Sprite {
        sprite: Sprite,
        rect: Rect,
        angle: f32,
        tint: Option<Color>,
        alpha: u8,
    },
    /// Text label anchored at `(x, y)`
    Label {
        text: String,
        x: f32,
        y: f32,
        size: TextSize,
        align: Align,
        color: Color,
        alpha: u8,
    },
}

impl DrawCommand {
    pub fn solid(rect: Rect, color: Color) -> Self {
        DrawCommand::Solid { rect, color }
    }

    pub fn sprite(sprite: Sprite, rect: Rect, angle: f32) -> Self {
        DrawCommand::Sprite {
            sprite,
            rect,
            angle,
            tint: None,
            alpha: 255,
        }
    }

    pub fn label(text: impl Into<String>, x: f32, y: f32, size: TextSize, align: Align) -> Self {
        DrawCommand::Label {
            text: text.into(),
            x,
            y,
            size,
            align,
            color: WHITE,
            alpha: 255,
        }
    }

    /// Tint a sprite or recolor a label
    pub fn with_color(mut self, new_color: Color) -> Self {
        match &mut self {
            DrawCommand::Solid { color, .. } => *color = new_color,
            DrawCommand::Sprite { tint, .. } => *tint = Some(new_color),
            DrawCommand::Label { color, .. } => *color = new_color,
        }
        self
    }

    pub fn with_alpha(mut self, new_alpha: u8) -> Self {
        match &mut self {
            DrawCommand::Solid { .. } => {}
            DrawCommand::Sprite { alpha, .. } | DrawCommand::Label { alpha, .. } => {
                *alpha = new_alpha
            }
        }
        self
    }
}

/// Receives draw commands in emission order
pub trait RenderSink {
    fn draw(&mut self, command: &DrawCommand);
}

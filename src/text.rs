//! Label text table

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Title,
    MadeBy,
    ControlsTitle,
    Controls,
    Start,
    Settings,
    Quit,
    Resume,
    MainMenu,
    Back,
    Sfx,
    Fullscreen,
    On,
    Off,
    Paused,
    GameOver,
    Restart,
    Level,
    Health,
    Exp,
    EnemiesDestroyed,
}

pub const CREDITS: &[&str] = &["Brett Chalupa"];

pub fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Minimal Survivors",
        TextKey::MadeBy => "A game by",
        TextKey::ControlsTitle => "Controls",
        TextKey::Controls => "WASD/Arrows to move | J/Z to shoot | Esc to pause",
        TextKey::Start => "Start",
        TextKey::Settings => "Settings",
        TextKey::Quit => "Quit",
        TextKey::Resume => "Resume",
        TextKey::MainMenu => "Main Menu",
        TextKey::Back => "Back",
        TextKey::Sfx => "Sound Effects",
        TextKey::Fullscreen => "Fullscreen",
        TextKey::On => "ON",
        TextKey::Off => "OFF",
        TextKey::Paused => "Paused",
        TextKey::GameOver => "Game Over",
        TextKey::Restart => "Press confirm to play again",
        TextKey::Level => "Level",
        TextKey::Health => "Health",
        TextKey::Exp => "Exp",
        TextKey::EnemiesDestroyed => "Enemies destroyed",
    }
}

//! Scene state machine
//!
//! `Game` owns everything that outlives a single frame: the active scene,
//! the gameplay `World`, per-scene menu cursors and settings. `Game::frame`
//! is the only per-frame entry point. It runs the active scene's handler,
//! applies at most one scene transition, and returns the frame's draw, sound
//! and platform intents.

use std::collections::HashMap;

use crate::audio::{AudioSink, SoundEffect, play_sfx};
use crate::consts::SFX_GAIN;
use crate::input::FrameInput;
use crate::menu::{MenuAction, MenuOption, MenuState};
use crate::render::{
    Align, DARK_BLUE, DARK_GRAY, DARK_GREEN, DARK_PURPLE, DrawCommand, RenderSink, Sprite,
    TextSize,
};
use crate::settings::{Settings, SettingsStore};
use crate::sim::{self, Rect, World};
use crate::text::{CREDITS, TextKey, text};

/// Top-level mode; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    MainMenu,
    Gameplay,
    Paused,
    Settings,
    GameOver,
}

/// A requested scene change, applied once at the end of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: Scene,
    /// Clear the target's state (for gameplay: start a fresh run)
    pub reset: bool,
    /// Where `Back` goes from a nested menu
    pub return_to: Option<Scene>,
}

impl Transition {
    pub fn to(target: Scene) -> Self {
        Self {
            target,
            reset: false,
            return_to: None,
        }
    }

    pub fn with_reset(mut self) -> Self {
        self.reset = true;
        self
    }

    pub fn returning_to(mut self, scene: Scene) -> Self {
        self.return_to = Some(scene);
        self
    }
}

/// Window chrome requests handled by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformRequest {
    Quit,
    SetFullscreen(bool),
}

/// Everything a frame wants the host to draw, play or do
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub draws: Vec<DrawCommand>,
    pub sounds: Vec<SoundEffect>,
    pub requests: Vec<PlatformRequest>,
}

impl Frame {
    /// Forward the frame's intents to the host sinks in emission order
    pub fn dispatch(&self, renderer: &mut impl RenderSink, audio: &mut impl AudioSink) {
        for command in &self.draws {
            renderer.draw(command);
        }
        for effect in &self.sounds {
            audio.play(*effect, SFX_GAIN);
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Base RNG seed; each new run offsets it by the run count
    pub seed: u64,
    /// Desktop builds offer Quit and Fullscreen
    pub desktop: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            desktop: true,
        }
    }
}

pub struct Game {
    config: GameConfig,
    scene: Scene,
    return_to: Option<Scene>,
    /// Created lazily on the first gameplay frame, dropped by a reset
    world: Option<World>,
    menus: HashMap<Scene, MenuState>,
    settings: Settings,
    store: Box<dyn SettingsStore>,
    /// Frames since startup, in every scene
    tick_count: u64,
    runs: u64,
    focused: bool,
}

impl Game {
    pub fn new(config: GameConfig, mut store: Box<dyn SettingsStore>) -> Self {
        let settings = match store.load() {
            Ok(Some(settings)) => {
                log::info!("Loaded settings: {settings:?}");
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Settings::default()
            }
            Err(err) => {
                log::warn!("Failed to load settings, using defaults: {err}");
                Settings::default()
            }
        };

        Self {
            config,
            scene: Scene::MainMenu,
            return_to: None,
            world: None,
            menus: HashMap::new(),
            settings,
            store,
            tick_count: 0,
            runs: 0,
            focused: true,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Run one frame of the active scene
    pub fn frame(&mut self, input: &FrameInput, arena: &Rect) -> Frame {
        let mut frame = Frame::default();
        let transition = match self.scene {
            Scene::MainMenu => self.tick_main_menu(input, arena, &mut frame),
            Scene::Gameplay => self.tick_gameplay(input, arena, &mut frame),
            Scene::Paused => self.tick_paused(input, arena, &mut frame),
            Scene::Settings => self.tick_settings(input, arena, &mut frame),
            Scene::GameOver => self.tick_game_over(input, arena, &mut frame),
        };
        if let Some(transition) = transition {
            self.switch_scene(transition);
        }
        self.tick_count += 1;
        frame
    }

    /// Replace the active scene
    pub fn switch_scene(&mut self, transition: Transition) {
        log::info!(
            "Scene {:?} -> {:?}{}",
            self.scene,
            transition.target,
            if transition.reset { " (reset)" } else { "" }
        );
        if transition.reset {
            self.menus.remove(&transition.target);
            if transition.target == Scene::Gameplay {
                self.world = None;
            }
        }
        if let Some(scene) = transition.return_to {
            self.return_to = Some(scene);
        }
        self.scene = transition.target;
    }

    fn tick_gameplay(&mut self, input: &FrameInput, arena: &Rect, frame: &mut Frame) -> Option<Transition> {
        if self.world.is_none() {
            let seed = self.config.seed.wrapping_add(self.runs);
            self.runs += 1;
            log::info!("Starting run {} with seed {seed}", self.runs);
            self.world = Some(World::new(seed, arena));
        }

        if self.focused != input.focused {
            log::debug!("Focus changed: {}", input.focused);
            self.focused = input.focused;
        }
        if !input.focused || input.pause_pressed {
            return Some(Transition::to(Scene::Paused));
        }
        frame.draws.push(DrawCommand::solid(*arena, DARK_GRAY));

        let world = self.world.as_mut()?;
        let events = sim::tick(world, input, arena);
        for event in &events {
            play_sfx(&self.settings, &mut frame.sounds, SoundEffect::for_event(event));
        }

        if world.player.health <= 0 {
            log::info!(
                "Player died at level {} after destroying {} enemies",
                world.player.level(),
                world.enemies_destroyed
            );
            return Some(Transition::to(Scene::GameOver));
        }

        draw_world(world, arena, frame);
        None
    }

    fn tick_main_menu(&mut self, input: &FrameInput, arena: &Rect, frame: &mut Frame) -> Option<Transition> {
        frame.draws.push(DrawCommand::solid(*arena, DARK_PURPLE));
        if let Some(transition) = self.run_menu(Scene::MainMenu, input, arena, frame) {
            return Some(transition);
        }

        let center_x = arena.center().x;
        frame.draws.extend([
            DrawCommand::label(
                text(TextKey::Title).to_uppercase(),
                center_x,
                arena.top() - 100.0,
                TextSize::Lg,
                Align::Center,
            ),
            DrawCommand::label(
                format!("{} {}", text(TextKey::MadeBy), CREDITS.join(", ")),
                arena.left() + 24.0,
                48.0,
                TextSize::Xs,
                Align::Left,
            ),
            DrawCommand::label(
                text(TextKey::ControlsTitle),
                arena.right() - 24.0,
                84.0,
                TextSize::Sm,
                Align::Right,
            ),
            DrawCommand::label(
                text(TextKey::Controls),
                arena.right() - 24.0,
                48.0,
                TextSize::Xs,
                Align::Right,
            ),
            DrawCommand::label(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                arena.left() + 24.0,
                arena.top() - 24.0,
                TextSize::Xs,
                Align::Left,
            ),
        ]);
        None
    }

    fn tick_paused(&mut self, input: &FrameInput, arena: &Rect, frame: &mut Frame) -> Option<Transition> {
        frame.draws.push(DrawCommand::solid(*arena, DARK_BLUE));
        if input.pause_pressed {
            return Some(Transition::to(Scene::Gameplay));
        }
        if let Some(transition) = self.run_menu(Scene::Paused, input, arena, frame) {
            return Some(transition);
        }

        frame.draws.push(DrawCommand::label(
            text(TextKey::Paused),
            arena.center().x,
            arena.top() - 200.0,
            TextSize::Lg,
            Align::Center,
        ));
        None
    }

    fn tick_settings(&mut self, input: &FrameInput, arena: &Rect, frame: &mut Frame) -> Option<Transition> {
        frame.draws.push(DrawCommand::solid(*arena, DARK_GREEN));
        if let Some(transition) = self.run_menu(Scene::Settings, input, arena, frame) {
            return Some(transition);
        }

        frame.draws.push(DrawCommand::label(
            text(TextKey::Settings),
            arena.center().x,
            arena.top() - 200.0,
            TextSize::Lg,
            Align::Center,
        ));
        None
    }

    fn tick_game_over(&mut self, input: &FrameInput, arena: &Rect, frame: &mut Frame) -> Option<Transition> {
        frame.draws.push(DrawCommand::solid(*arena, DARK_BLUE));
        if input.confirm_pressed {
            return Some(Transition::to(Scene::Gameplay).with_reset());
        }

        let (level, destroyed) = self
            .world
            .as_ref()
            .map(|w| (w.player.level(), w.enemies_destroyed))
            .unwrap_or((1, 0));
        let center_x = arena.center().x;
        let blink = (self.tick_count % 155 + 100) as u8;
        frame.draws.extend([
            DrawCommand::label(
                text(TextKey::GameOver),
                center_x,
                arena.top() - 200.0,
                TextSize::Lg,
                Align::Center,
            ),
            DrawCommand::label(
                format!("{}: {level}", text(TextKey::Level)),
                center_x,
                arena.top() - 320.0,
                TextSize::Sm,
                Align::Center,
            ),
            DrawCommand::label(
                format!("{}: {destroyed}", text(TextKey::EnemiesDestroyed)),
                center_x,
                arena.top() - 380.0,
                TextSize::Sm,
                Align::Center,
            ),
            DrawCommand::label(
                text(TextKey::Restart),
                center_x,
                arena.top() - 480.0,
                TextSize::Sm,
                Align::Center,
            )
            .with_alpha(blink),
        ]);
        None
    }

    fn menu_options(&self, scene: Scene) -> Vec<MenuOption> {
        let desktop = self.config.desktop;
        match scene {
            Scene::MainMenu => {
                let mut options = vec![
                    MenuOption::new(TextKey::Start, MenuAction::Start),
                    MenuOption::new(TextKey::Settings, MenuAction::OpenSettings),
                ];
                if desktop {
                    options.push(MenuOption::new(TextKey::Quit, MenuAction::Quit));
                }
                options
            }
            Scene::Paused => vec![
                MenuOption::new(TextKey::Resume, MenuAction::Resume),
                MenuOption::new(TextKey::Settings, MenuAction::OpenSettings),
                MenuOption::new(TextKey::MainMenu, MenuAction::MainMenu),
            ],
            Scene::Settings => {
                let mut options = vec![MenuOption::toggle(
                    TextKey::Sfx,
                    MenuAction::ToggleSfx,
                    self.settings.sfx,
                )];
                if desktop {
                    options.push(MenuOption::toggle(
                        TextKey::Fullscreen,
                        MenuAction::ToggleFullscreen,
                        self.settings.fullscreen,
                    ));
                }
                options.push(MenuOption::new(TextKey::Back, MenuAction::Back));
                options
            }
            Scene::Gameplay | Scene::GameOver => Vec::new(),
        }
    }

    /// Navigate the scene's menu, run a confirmed action and draw the options
    fn run_menu(&mut self, scene: Scene, input: &FrameInput, arena: &Rect, frame: &mut Frame) -> Option<Transition> {
        let options = self.menu_options(scene);
        let menu = self.menus.entry(scene).or_default();
        let before = menu.current_option_index;
        let action = menu.tick(&options, input);
        if menu.current_option_index != before {
            play_sfx(&self.settings, &mut frame.sounds, SoundEffect::MenuMove);
        }
        if let Some(action) = action {
            play_sfx(&self.settings, &mut frame.sounds, SoundEffect::MenuSelect);
            if let Some(transition) = self.run_action(action, frame) {
                return Some(transition);
            }
        }

        // Rebuilt so toggles show their new value this frame
        let options = self.menu_options(scene);
        let menu = self.menus.entry(scene).or_default();
        frame.draws.extend(menu.draw(&options, arena, self.tick_count));
        None
    }

    fn run_action(&mut self, action: MenuAction, frame: &mut Frame) -> Option<Transition> {
        match action {
            MenuAction::Start => Some(Transition::to(Scene::Gameplay).with_reset()),
            MenuAction::OpenSettings => Some(
                Transition::to(Scene::Settings)
                    .with_reset()
                    .returning_to(self.scene),
            ),
            MenuAction::Quit => {
                log::info!("Quit requested");
                frame.requests.push(PlatformRequest::Quit);
                None
            }
            MenuAction::Resume => Some(Transition::to(Scene::Gameplay)),
            MenuAction::MainMenu => Some(Transition::to(Scene::MainMenu)),
            MenuAction::ToggleSfx => {
                self.settings.sfx = !self.settings.sfx;
                self.save_settings();
                None
            }
            MenuAction::ToggleFullscreen => {
                self.settings.fullscreen = !self.settings.fullscreen;
                frame
                    .requests
                    .push(PlatformRequest::SetFullscreen(self.settings.fullscreen));
                self.save_settings();
                None
            }
            MenuAction::Back => Some(Transition::to(
                self.return_to.unwrap_or(Scene::MainMenu),
            )),
        }
    }

    fn save_settings(&mut self) {
        if let Err(err) = self.store.save(&self.settings) {
            log::warn!("Failed to save settings: {err}");
        }
    }
}

/// Sprites for every live entity plus the HUD along the top edge
fn draw_world(world: &World, arena: &Rect, frame: &mut Frame) {
    let player = &world.player;

    for fragment in &world.fragments {
        frame
            .draws
            .push(DrawCommand::sprite(Sprite::ExpChip, fragment.rect, fragment.angle));
    }
    for enemy in &world.enemies {
        frame
            .draws
            .push(DrawCommand::sprite(Sprite::Enemy, enemy.rect, enemy.angle));
    }
    for bullet in player.bullets.iter().filter(|b| b.alive) {
        frame
            .draws
            .push(DrawCommand::sprite(Sprite::Bullet, bullet.rect, bullet.angle));
    }

    let sprite = DrawCommand::sprite(Sprite::Player, player.rect, 0.0);
    frame.draws.push(match player.flash {
        Some(flash) => sprite.with_color(flash.color),
        None => sprite,
    });
    if let Some(familiar) = &player.familiar {
        frame
            .draws
            .push(DrawCommand::sprite(Sprite::Familiar, familiar.rect, familiar.angle));
    }

    frame.draws.extend([
        DrawCommand::label(
            format!("{}: {}", text(TextKey::Health), player.health),
            arena.left() + 24.0,
            arena.top() - 20.0,
            TextSize::Sm,
            Align::Left,
        ),
        DrawCommand::label(
            format!(
                "{} {} ({} {})",
                text(TextKey::Level),
                player.level(),
                player.exp,
                text(TextKey::Exp)
            ),
            arena.left() + 24.0,
            arena.top() - 56.0,
            TextSize::Sm,
            Align::Left,
        ),
        DrawCommand::label(
            format!("{}: {}", text(TextKey::EnemiesDestroyed), world.enemies_destroyed),
            arena.right() - 24.0,
            arena.top() - 20.0,
            TextSize::Sm,
            Align::Right,
        ),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::consts::*;
    use crate::render::{Color, RED};
    use crate::settings::MemoryStore;
    use crate::sim::Enemy;

    /// Store whose disk is always unavailable
    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn load(&mut self) -> crate::Result<Option<Settings>> {
            Err(Error::Io(std::io::Error::other("disk unavailable")))
        }

        fn save(&mut self, _settings: &Settings) -> crate::Result<()> {
            Err(Error::Io(std::io::Error::other("disk unavailable")))
        }
    }

    fn player_tint(frame: &Frame) -> Option<Option<Color>> {
        frame.draws.iter().find_map(|d| match d {
            DrawCommand::Sprite {
                sprite: Sprite::Player,
                tint,
                ..
            } => Some(*tint),
            _ => None,
        })
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    fn confirm() -> FrameInput {
        FrameInput {
            confirm_pressed: true,
            ..idle()
        }
    }

    fn down() -> FrameInput {
        FrameInput {
            down: true,
            ..idle()
        }
    }

    fn up() -> FrameInput {
        FrameInput {
            up: true,
            ..idle()
        }
    }

    fn new_game(desktop: bool) -> Game {
        Game::new(
            GameConfig {
                seed: 7,
                desktop,
            },
            Box::new(MemoryStore::default()),
        )
    }

    /// Game one frame into a fresh run
    fn playing() -> Game {
        let mut game = new_game(true);
        game.switch_scene(Transition::to(Scene::Gameplay).with_reset());
        game.frame(&idle(), &Rect::arena());
        game
    }

    fn world_ticks(game: &Game) -> u64 {
        game.world().map(|w| w.ticks).unwrap_or(0)
    }

    #[test]
    fn test_start_from_main_menu() {
        let arena = Rect::arena();
        let mut game = new_game(true);
        assert_eq!(game.scene(), Scene::MainMenu);

        game.frame(&confirm(), &arena);
        assert_eq!(game.scene(), Scene::Gameplay);
        // The transition ends the frame; gameplay starts next frame
        assert!(game.world().is_none());

        game.frame(&idle(), &arena);
        assert_eq!(world_ticks(&game), 1);
    }

    #[test]
    fn test_reset_transition_yields_fresh_world() {
        let arena = Rect::arena();
        let mut game = playing();
        {
            let world = game.world.as_mut().unwrap();
            world.player.health = 2;
            world.player.exp = 9;
            world.enemies_destroyed = 4;
            world.enemies.push(Enemy::new(0.0, 0.0));
        }

        game.switch_scene(Transition::to(Scene::Gameplay).with_reset());
        assert!(game.world().is_none());
        game.frame(&idle(), &arena);

        let world = game.world().unwrap();
        assert_eq!(world.player.health, PLAYER_START_HEALTH);
        assert_eq!(world.player.exp, 0);
        assert!(world.enemies.is_empty());
        assert!(world.fragments.is_empty());
        assert_eq!(world.enemies_destroyed, 0);
    }

    #[test]
    fn test_focus_loss_pauses_without_simulating() {
        let arena = Rect::arena();
        let mut game = playing();
        let blur = FrameInput {
            focused: false,
            ..idle()
        };
        let frame = game.frame(&blur, &arena);
        assert_eq!(game.scene(), Scene::Paused);
        assert_eq!(world_ticks(&game), 1);
        // Nothing from the gameplay screen leaks into the pausing frame
        assert!(frame.draws.is_empty());
    }

    #[test]
    fn test_hud_follows_arena() {
        let arena = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut game = new_game(true);
        game.switch_scene(Transition::to(Scene::Gameplay).with_reset());
        let frame = game.frame(&idle(), &arena);

        let labels: Vec<(f32, f32)> = frame
            .draws
            .iter()
            .filter_map(|d| match d {
                DrawCommand::Label { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 3);
        for (x, y) in labels {
            assert!((arena.left()..=arena.right()).contains(&x), "x {x} outside arena");
            assert!((arena.bottom()..=arena.top()).contains(&y), "y {y} outside arena");
        }
    }

    #[test]
    fn test_hurt_flash_tints_player_until_it_expires() {
        let arena = Rect::arena();
        let mut game = playing();
        assert_eq!(player_tint(&game.frame(&idle(), &arena)), Some(None));

        game.world.as_mut().unwrap().player.start_flash(RED, 2);
        assert_eq!(player_tint(&game.frame(&idle(), &arena)), Some(Some(RED)));
        assert_eq!(player_tint(&game.frame(&idle(), &arena)), Some(None));
    }

    #[test]
    fn test_broken_store_keeps_in_memory_settings() {
        let arena = Rect::arena();
        let mut game = Game::new(GameConfig::default(), Box::new(BrokenStore));
        assert_eq!(*game.settings(), Settings::default());

        game.switch_scene(Transition::to(Scene::Settings).returning_to(Scene::MainMenu));
        game.frame(&confirm(), &arena);
        assert!(!game.settings().sfx);
        assert_eq!(game.scene(), Scene::Settings);
    }

    #[test]
    fn test_game_over_restart_label_blinks() {
        let arena = Rect::arena();
        let mut game = playing();
        game.switch_scene(Transition::to(Scene::GameOver));

        for (tick_count, expected) in [(200u64, 145u8), (154, 254), (155, 100)] {
            game.tick_count = tick_count;
            let frame = game.frame(&idle(), &arena);
            let alpha = frame.draws.iter().find_map(|d| match d {
                DrawCommand::Label { text: label, alpha, .. }
                    if label.as_str() == text(TextKey::Restart) =>
                {
                    Some(*alpha)
                }
                _ => None,
            });
            assert_eq!(alpha, Some(expected));
        }
    }

    #[test]
    fn test_pause_and_resume_preserves_world() {
        let arena = Rect::arena();
        let mut game = playing();
        let pause = FrameInput {
            pause_pressed: true,
            ..idle()
        };
        game.frame(&pause, &arena);
        assert_eq!(game.scene(), Scene::Paused);

        game.frame(&pause, &arena);
        assert_eq!(game.scene(), Scene::Gameplay);
        game.frame(&idle(), &arena);
        assert_eq!(world_ticks(&game), 2);
    }

    #[test]
    fn test_resume_from_pause_menu() {
        let arena = Rect::arena();
        let mut game = playing();
        game.switch_scene(Transition::to(Scene::Paused));
        game.frame(&confirm(), &arena);
        assert_eq!(game.scene(), Scene::Gameplay);
        assert_eq!(world_ticks(&game), 1);
    }

    #[test]
    fn test_game_over_on_fatal_contact() {
        let arena = Rect::arena();
        let mut game = playing();
        {
            let world = game.world.as_mut().unwrap();
            world.player.health = 1;
            let pos = world.player.rect.position();
            world.enemies.push(Enemy::new(pos.x + 5.0, pos.y + 5.0));
        }

        let frame = game.frame(&idle(), &arena);
        assert_eq!(game.scene(), Scene::GameOver);
        let world = game.world().unwrap();
        assert_eq!(world.player.health, 0);
        assert_eq!(world.ticks, 2);
        // Nothing after the transition ran: only the background was drawn
        assert_eq!(frame.draws.len(), 1);
        assert!(frame.sounds.contains(&SoundEffect::PlayerHurt));

        // Stats stay visible on the game-over screen
        let frame = game.frame(&idle(), &arena);
        assert!(frame.draws.iter().any(|d| matches!(
            d,
            DrawCommand::Label { text, .. } if text == "Level: 1"
        )));
    }

    #[test]
    fn test_restart_from_game_over() {
        let arena = Rect::arena();
        let mut game = playing();
        game.world.as_mut().unwrap().player.health = 0;
        game.switch_scene(Transition::to(Scene::GameOver));

        game.frame(&confirm(), &arena);
        assert_eq!(game.scene(), Scene::Gameplay);
        assert!(game.world().is_none());
        game.frame(&idle(), &arena);
        assert_eq!(game.world().unwrap().player.health, PLAYER_START_HEALTH);
    }

    #[test]
    fn test_settings_round_trip_from_main_menu() {
        let arena = Rect::arena();
        let mut game = new_game(true);

        game.frame(&down(), &arena);
        game.frame(&confirm(), &arena);
        assert_eq!(game.scene(), Scene::Settings);

        // First option toggles sfx and stays on the settings screen
        let frame = game.frame(&confirm(), &arena);
        assert!(!game.settings().sfx);
        assert_eq!(game.scene(), Scene::Settings);
        // The select sound was queued before sfx went off
        assert_eq!(frame.sounds, vec![SoundEffect::MenuSelect]);

        // Up wraps to Back
        game.frame(&up(), &arena);
        game.frame(&confirm(), &arena);
        assert_eq!(game.scene(), Scene::MainMenu);
    }

    #[test]
    fn test_settings_back_returns_to_pause() {
        let arena = Rect::arena();
        let mut game = playing();
        game.switch_scene(Transition::to(Scene::Paused));

        game.frame(&down(), &arena);
        game.frame(&confirm(), &arena);
        assert_eq!(game.scene(), Scene::Settings);

        game.frame(&up(), &arena);
        game.frame(&confirm(), &arena);
        assert_eq!(game.scene(), Scene::Paused);
        // Paused kept its cursor on Settings and the world survived
        assert_eq!(game.menus[&Scene::Paused].current_option_index, 1);
        assert_eq!(world_ticks(&game), 1);
    }

    #[test]
    fn test_menu_move_sound_only_when_cursor_moves() {
        let arena = Rect::arena();
        let mut game = new_game(true);
        assert_eq!(game.frame(&down(), &arena).sounds, vec![SoundEffect::MenuMove]);
        // Held down is throttled by the repeat delay
        assert!(game.frame(&down(), &arena).sounds.is_empty());
        assert!(game.frame(&idle(), &arena).sounds.is_empty());
    }

    #[test]
    fn test_fullscreen_toggle_requests_platform() {
        let arena = Rect::arena();
        let mut game = new_game(true);
        game.switch_scene(Transition::to(Scene::Settings).returning_to(Scene::MainMenu));
        game.frame(&down(), &arena);
        let frame = game.frame(&confirm(), &arena);
        assert!(game.settings().fullscreen);
        assert_eq!(frame.requests, vec![PlatformRequest::SetFullscreen(true)]);
    }

    #[test]
    fn test_quit_only_on_desktop() {
        let arena = Rect::arena();
        let mut game = new_game(true);
        game.frame(&up(), &arena);
        let frame = game.frame(&confirm(), &arena);
        assert_eq!(frame.requests, vec![PlatformRequest::Quit]);

        let mut game = new_game(false);
        game.frame(&up(), &arena);
        game.frame(&confirm(), &arena);
        // Two options: up from Start wraps to Settings
        assert_eq!(game.scene(), Scene::Settings);
    }

    #[test]
    fn test_shoot_sound_gated_by_setting() {
        let arena = Rect::arena();
        let fire = FrameInput {
            fire_held: true,
            ..idle()
        };

        let mut game = playing();
        let shots: usize = (0..BULLET_COOLDOWN_TICKS)
            .map(|_| {
                let frame = game.frame(&fire, &arena);
                frame.sounds.iter().filter(|s| **s == SoundEffect::Shoot).count()
            })
            .sum();
        assert_eq!(shots, 1);

        let mut game = playing();
        game.settings.sfx = false;
        for _ in 0..BULLET_COOLDOWN_TICKS {
            assert!(game.frame(&fire, &arena).sounds.is_empty());
        }
    }

    #[test]
    fn test_settings_loaded_from_store() {
        let mut store = MemoryStore::default();
        store
            .save(&Settings {
                sfx: false,
                fullscreen: true,
            })
            .unwrap();
        let game = Game::new(GameConfig::default(), Box::new(store));
        assert!(!game.settings().sfx);
        assert!(game.settings().fullscreen);
    }

    #[test]
    fn test_gameplay_draws_player_and_hud() {
        let arena = Rect::arena();
        let mut game = playing();
        let frame = game.frame(&idle(), &arena);
        assert!(matches!(frame.draws[0], DrawCommand::Solid { .. }));
        assert!(frame.draws.iter().any(|d| matches!(
            d,
            DrawCommand::Sprite {
                sprite: Sprite::Player,
                ..
            }
        )));
        assert!(frame.draws.iter().any(|d| matches!(
            d,
            DrawCommand::Sprite {
                sprite: Sprite::Familiar,
                ..
            }
        )));
    }
}

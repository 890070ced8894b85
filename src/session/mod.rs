//! Session sequencing
//!
//! One cooperative loop drives everything: the menu, the active game's fixed
//! tick, the maze's level transitions and the blocking game-over summary.
//! All hardware access goes through a [`SessionContext`] built once at boot
//! and lent to [`SessionController::step`].

pub mod menu;
pub mod summary;

pub use summary::GameSummary;

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::*;
use crate::highscores::ScoreStore;
use crate::platform::{Buttons, Buzzer, Clock, PixelDisplay, TiltSensor};
use crate::settings::Settings;
use crate::sim::{Game, GameId, GameRng, LevelAdvance, SignalConditioner};

/// Collaborators lent to the controller for each step
pub struct SessionContext<'a> {
    pub display: &'a mut dyn PixelDisplay,
    pub sensor: &'a mut dyn TiltSensor,
    pub buzzer: &'a mut dyn Buzzer,
    pub buttons: &'a mut dyn Buttons,
    pub clock: &'a mut dyn Clock,
    pub scores: &'a mut ScoreStore,
}

/// Block until no button is held
pub(crate) fn wait_for_release(buttons: &mut dyn Buttons, clock: &mut dyn Clock) {
    while buttons.poll().any() {
        clock.delay_ms(BUTTON_POLL_MS);
    }
}

/// Where the session is
#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing(Box<Game>),
}

#[derive(Debug, Clone)]
pub struct SessionController {
    phase: Phase,
    selection: GameId,
    conditioner: SignalConditioner,
    rng: GameRng,
    audio: AudioManager,
    game_speed_ms: u32,
    games_played: u32,
    last_summary: Option<GameSummary>,
}

impl SessionController {
    pub fn new(settings: &Settings, rng: GameRng) -> Self {
        Self {
            phase: Phase::Menu,
            selection: GameId::default(),
            conditioner: SignalConditioner::new(settings.filter_alpha, settings.deadband),
            rng,
            audio: AudioManager::new(settings.sound_enabled),
            game_speed_ms: settings.game_speed_ms,
            games_played: 0,
            last_summary: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn in_menu(&self) -> bool {
        matches!(self.phase, Phase::Menu)
    }

    /// Highlighted menu entry
    pub fn selection(&self) -> GameId {
        self.selection
    }

    pub fn game(&self) -> Option<&Game> {
        match &self.phase {
            Phase::Playing(game) => Some(&**game),
            Phase::Menu => None,
        }
    }

    /// Active game, for setup before the next tick
    pub fn game_mut(&mut self) -> Option<&mut Game> {
        match &mut self.phase {
            Phase::Playing(game) => Some(&mut **game),
            Phase::Menu => None,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Summary of the most recently finished game
    pub fn last_summary(&self) -> Option<&GameSummary> {
        self.last_summary.as_ref()
    }

    /// Run one menu poll or one game tick
    pub fn step(&mut self, ctx: &mut SessionContext<'_>) {
        match std::mem::take(&mut self.phase) {
            Phase::Menu => self.menu_step(ctx),
            Phase::Playing(mut game) => {
                self.tick(&mut game, ctx);
                if game.is_over() {
                    self.conclude(&game, ctx);
                } else {
                    self.phase = Phase::Playing(game);
                    ctx.clock.delay_ms(self.game_speed_ms);
                }
            }
        }
    }

    /// Bounded run for demos and tests
    pub fn run_for(&mut self, ctx: &mut SessionContext<'_>, steps: u64) {
        for _ in 0..steps {
            self.step(ctx);
        }
    }

    /// Run until power-off
    pub fn run(&mut self, ctx: &mut SessionContext<'_>) -> ! {
        loop {
            self.step(ctx);
        }
    }

    fn menu_step(&mut self, ctx: &mut SessionContext<'_>) {
        menu::render(self.selection, ctx.display);

        let buttons = ctx.buttons.poll();
        if buttons.navigate {
            self.selection = self.selection.next();
            log::debug!("Menu selection: {}", self.selection.title());
            wait_for_release(ctx.buttons, ctx.clock);
            ctx.clock.delay_ms(MENU_SETTLE_MS);
        } else if buttons.select {
            wait_for_release(ctx.buttons, ctx.clock);
            ctx.clock.delay_ms(MENU_SETTLE_MS);
            self.start_game(ctx);
        } else {
            ctx.clock.delay_ms(BUTTON_POLL_MS);
        }
    }

    /// Build the selected game with its cached record
    pub fn start_game(&mut self, ctx: &mut SessionContext<'_>) {
        let id = self.selection;
        let high_score = ctx.scores.read_high_score(id);
        match Game::new(id, high_score, &mut self.rng) {
            Ok(game) => {
                log::info!("Starting {} (record {})", id.title(), high_score);
                self.conditioner.reset();
                self.phase = Phase::Playing(Box::new(game));
            }
            Err(e) => {
                log::error!("Could not start {}: {}", id.title(), e);
                self.phase = Phase::Menu;
            }
        }
    }

    fn tick(&mut self, game: &mut Game, ctx: &mut SessionContext<'_>) {
        let input = self.conditioner.sample(ctx.sensor.read_accel());
        if let Some(event) = game.update(&input, &mut self.rng) {
            self.audio.play(event.into(), ctx.buzzer, ctx.clock);
        }
        game.render(ctx.display);

        if let Some(maze) = game.as_maze_mut()
            && maze.level_complete
        {
            ctx.clock.delay_ms(LEVEL_CLEAR_PAUSE_MS);
            match maze.advance_level() {
                Ok(LevelAdvance::Next(level)) => {
                    log::info!("Tilt Maze: advancing to level {}", level);
                    for frame in 0..LEVEL_BANNER_FRAMES {
                        maze.render_transition(ctx.display, frame);
                        ctx.clock.delay_ms(LEVEL_BANNER_FRAME_MS);
                    }
                    ctx.clock.delay_ms(LEVEL_START_PAUSE_MS);
                }
                Ok(LevelAdvance::Finished) => log::info!("Tilt Maze: all levels cleared"),
                Err(e) => {
                    log::error!("Tilt Maze: level load failed: {}", e);
                    maze.game_over = true;
                }
            }
        }
    }

    /// Record check, jingle, blocking summary, back to the menu
    fn conclude(&mut self, game: &Game, ctx: &mut SessionContext<'_>) {
        let id = game.id();
        let score = game.score();
        let outcome = ctx.scores.submit(id, score, game.high_score());
        log::info!(
            "{} over: score {} (record {}{})",
            id.title(),
            score,
            outcome.high_score,
            if outcome.new_record { ", new" } else { "" }
        );

        let summary = GameSummary {
            game: id,
            score,
            high_score: outcome.high_score,
            new_record: outcome.new_record,
            won: game.won(),
        };
        self.audio
            .play(SoundEffect::for_game_end(outcome.new_record), ctx.buzzer, ctx.clock);
        summary::show(&summary, ctx.display, ctx.buttons, ctx.clock);

        self.games_played += 1;
        self.last_summary = Some(summary);
        self.phase = Phase::Menu;
    }
}

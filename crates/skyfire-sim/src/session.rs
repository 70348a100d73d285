//! Session state, the single owned aggregate every system mutates.
//!
//! Created once per engine and reset in place on restart.

use glam::Vec2;

use skyfire_core::config::GameConfig;
use skyfire_core::constants::*;
use skyfire_core::entities::*;
use skyfire_core::enums::GamePhase;
use skyfire_core::events::GameEvent;
use skyfire_core::types::Viewport;

/// Last-spawn timestamps (ms of sim time), one per spawn category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnTimers {
    pub asteroid: f64,
    pub ship: f64,
    pub boss: f64,
    pub power_up: f64,
    pub special: f64,
    pub health_refill: f64,
}

/// Everything that changes while a session is being played.
#[derive(Debug, Clone)]
pub struct Session {
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub lives: u32,
    pub max_lives: u32,
    pub starting_lives: u32,
    pub score: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub pickups: Vec<Pickup>,
    pub rings: Vec<SpecialRing>,
    pub timers: SpawnTimers,
    /// `None` until the first frame arms the auto-fire timer.
    pub last_shot_ms: Option<f64>,
    /// Events raised during the current tick.
    pub events: Vec<GameEvent>,
    next_enemy_id: u32,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        let viewport = config.viewport();
        Self {
            viewport,
            phase: GamePhase::Playing,
            lives: config.starting_lives.min(config.max_lives),
            max_lives: config.max_lives,
            starting_lives: config.starting_lives,
            score: 0,
            player: fresh_player(&viewport),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            pickups: Vec::new(),
            rings: Vec::new(),
            timers: SpawnTimers::default(),
            last_shot_ms: None,
            events: Vec::new(),
            next_enemy_id: 0,
        }
    }

    /// Reinitialise all session state in place. The viewport is kept.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.lives = self.starting_lives.min(self.max_lives);
        self.score = 0;
        self.player = fresh_player(&self.viewport);
        self.enemies.clear();
        self.enemy_bullets.clear();
        self.pickups.clear();
        self.rings.clear();
        self.timers = SpawnTimers::default();
        self.last_shot_ms = None;
        self.events.clear();
        self.next_enemy_id = 0;
    }

    /// Hand out a fresh enemy id.
    pub fn next_enemy_id(&mut self) -> EntityId {
        let id = EntityId(self.next_enemy_id);
        self.next_enemy_id += 1;
        id
    }

    pub fn boss_alive(&self) -> bool {
        self.enemies.iter().any(Enemy::is_boss)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

fn fresh_player(viewport: &Viewport) -> Player {
    Player {
        pos: Vec2::new(PLAYER_START_X, viewport.height / 2.0),
        size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        power_stage: 0,
        special_count: 0,
        bullets: Vec::new(),
    }
}

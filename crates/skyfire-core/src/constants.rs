//! Simulation constants and tuning parameters.
//!
//! Distances are canvas pixels, speeds are pixels per frame and timers are
//! milliseconds of simulation time.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick.
pub const FRAME_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Viewport ---

/// Default canvas width when no viewport is configured.
pub const DEFAULT_CANVAS_WIDTH: f32 = 1280.0;

/// Default canvas height when no viewport is configured.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 720.0;

/// Player x is clamped to this fraction of the canvas width (minus ship width).
pub const PLAYER_MAX_X_FRACTION: f32 = 0.9;

// --- Session ---

/// Lives at the start of a session.
pub const STARTING_LIVES: u32 = 3;

/// Upper bound on lives; health refills stop spawning at this count.
pub const MAX_LIVES: u32 = 5;

/// Highest power stage.
pub const POWER_STAGE_MAX: u8 = 6;

/// Power stages above this are refunded on life loss and suspend power-up spawns.
pub const POWER_STAGE_REFUND_THRESHOLD: u8 = 3;

/// Power stages removed per life lost above the refund threshold.
pub const POWER_STAGE_LIFE_PENALTY: u8 = 2;

/// Maximum banked special charges.
pub const SPECIAL_MAX: u8 = 3;

// --- Player ---

pub const PLAYER_START_X: f32 = 50.0;
pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 30.0;

/// Fire interval at power stage 0.
pub const BASE_FIRE_INTERVAL_MS: f64 = 500.0;

/// Player bullet speed.
pub const PLAYER_BULLET_SPEED: f32 = 10.0;
pub const PLAYER_BULLET_WIDTH: f32 = 10.0;
pub const PLAYER_BULLET_HEIGHT: f32 = 2.0;

/// Vertical offset of the twin bullets at stages 2 and 3.
pub const TWIN_SHOT_OFFSET: f32 = 5.0;

/// Vertical offset of the outer forward bullets in the spread pattern.
pub const SPREAD_SHOT_OFFSET: f32 = 10.0;

/// Damage dealt by a regular player bullet.
pub const BULLET_DAMAGE: i32 = 1;

/// Damage dealt by a special player bullet.
pub const SPECIAL_BULLET_DAMAGE: i32 = 2;

// --- Special ring ---

pub const RING_EXPANSION_SPEED: f32 = 5.0;
pub const RING_THICKNESS: f32 = 10.0;
pub const RING_DAMAGE: i32 = 2;

// --- Asteroids ---

/// Side length per size class (index 1, 2, 3).
pub const ASTEROID_SIZES: [f32; 3] = [20.0, 35.0, 50.0];

/// HP is `ceil(size / ASTEROID_HP_DIVISOR)`.
pub const ASTEROID_HP_DIVISOR: f32 = 20.0;

pub const ASTEROID_MIN_SPEED: u32 = 1;
pub const ASTEROID_MAX_SPEED: u32 = 5;

/// Probability that a freshly spawned asteroid moves diagonally.
pub const ASTEROID_DIAGONAL_CHANCE: f64 = 0.15;

pub const ASTEROID_MIN_SPIN: f32 = 0.01;
pub const ASTEROID_MAX_SPIN: f32 = 0.06;

// --- Fragments ---

/// Added to the parent's horizontal speed for every fragment.
pub const FRAGMENT_EXTRA_SPEED: f32 = 2.0;

/// Vertical velocity jitter by fragment slot.
pub const FRAGMENT_JITTER: [f32; 3] = [0.0, 2.0, -2.0];

// --- Enemy ships ---

pub const SHIP_WIDTH: f32 = 50.0;
pub const SHIP_HEIGHT: f32 = 40.0;
pub const SHIP_SPEED: f32 = 3.0;
pub const SHIP_HP: i32 = 5;
pub const SHIP_FIRE_INTERVAL_MS: f64 = 2000.0;
pub const SHIP_BULLET_SPEED: f32 = 5.0;

// --- Boss ---

pub const BOSS_SIZE: f32 = 200.0;
pub const BOSS_SPEED: f32 = 2.0;
pub const BOSS_HP: i32 = 50;
pub const BOSS_FIRE_INTERVAL_MS: f64 = 2000.0;
pub const BOSS_BULLET_SPEED: f32 = 7.0;

/// Gap the boss keeps between its right edge and the canvas right edge.
pub const BOSS_STANDOFF: f32 = 100.0;

/// Bullets per boss volley (one every 15 degrees).
pub const BOSS_VOLLEY_COUNT: u32 = 24;

/// Score required before a boss may appear.
pub const BOSS_SCORE_THRESHOLD: u32 = 30;

// --- Enemy bullets ---

pub const ENEMY_BULLET_WIDTH: f32 = 8.0;
pub const ENEMY_BULLET_HEIGHT: f32 = 4.0;

// --- Pickups ---

pub const PICKUP_SIZE: f32 = 20.0;
pub const PICKUP_SPEED: f32 = 2.0;

// --- Scoring ---

pub const BOSS_KILL_SCORE: u32 = 50;
pub const SHIP_KILL_SCORE: u32 = 5;

// --- Spawn cadence ---

pub const POWER_UP_SPAWN_INTERVAL_MS: f64 = 7000.0;
pub const SPECIAL_SPAWN_INTERVAL_MS: f64 = 15000.0;
pub const HEALTH_REFILL_SPAWN_INTERVAL_MS: f64 = 10000.0;
pub const BOSS_SPAWN_INTERVAL_MS: f64 = 10000.0;

/// Asteroid cadence is `max(ASTEROID_SPAWN_FLOOR_MS, ASTEROID_SPAWN_BASE_MS - stage * ASTEROID_SPAWN_STEP_MS)`.
pub const ASTEROID_SPAWN_BASE_MS: f64 = 1000.0;
pub const ASTEROID_SPAWN_STEP_MS: f64 = 100.0;
pub const ASTEROID_SPAWN_FLOOR_MS: f64 = 300.0;

/// Ship cadence is `max(SHIP_SPAWN_FLOOR_MS, SHIP_SPAWN_BASE_MS - stage * SHIP_SPAWN_STEP_MS)`.
pub const SHIP_SPAWN_BASE_MS: f64 = 5000.0;
pub const SHIP_SPAWN_STEP_MS: f64 = 500.0;
pub const SHIP_SPAWN_FLOOR_MS: f64 = 2000.0;

// --- Background ---

/// Number of background stars.
pub const STAR_COUNT: usize = 150;
pub const STAR_MIN_RADIUS: f32 = 0.5;
pub const STAR_MAX_RADIUS: f32 = 2.0;

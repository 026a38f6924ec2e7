//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::Rules`]; the engine only
//! reads tunables through `Rules` so a match can be configured per session.

// --- World bounds ---

/// Map width in pixels.
pub const WORLD_WIDTH: f64 = 1920.0;

/// Map height in pixels.
pub const WORLD_HEIGHT: f64 = 1000.0;

// --- Obstacles ---

/// Number of obstacles placed at world setup.
pub const OBSTACLE_COUNT: u32 = 16;

/// Smallest sampled obstacle radius.
pub const OBSTACLE_RADIUS_MIN: i32 = 60;

/// Largest sampled obstacle radius (inclusive).
pub const OBSTACLE_RADIUS_MAX: i32 = 90;

/// Smallest initial mineral endowment.
pub const OBSTACLE_MINERAL_MIN: i32 = 200;

/// Largest initial mineral endowment (inclusive).
pub const OBSTACLE_MINERAL_MAX: i32 = 400;

/// Smallest per-obstacle cap on mine income rate.
pub const OBSTACLE_MAX_MINERAL_RATE_MIN: i32 = 1;

/// Largest per-obstacle cap on mine income rate (inclusive).
pub const OBSTACLE_MAX_MINERAL_RATE_MAX: i32 = 5;

/// Minimum gap kept between two obstacle edges at placement.
pub const OBSTACLE_GAP: f64 = 10.0;

/// Placement attempts per obstacle before it is skipped.
pub const OBSTACLE_PLACEMENT_ATTEMPTS: u32 = 100;

// --- Mines ---

/// Income rate of a freshly built mine.
pub const MINE_BASE_INCOME_RATE: i32 = 1;

// --- Towers ---

/// Health lost by every tower each tick.
pub const TOWER_MELT_RATE: i32 = 4;

/// Coverage area (square pixels) granted per point of tower health.
pub const TOWER_COVERAGE_PER_HP: f64 = 1000.0;

/// Damage dealt to a creep standing at the foot of the tower.
pub const TOWER_CREEP_DAMAGE_MAX: f64 = 15.0;

/// Standoff distance over which tower damage drops by one point.
pub const TOWER_CREEP_DAMAGE_DROP_DISTANCE: f64 = 50.0;

/// Damage dealt to the enemy player when the tower shoots their queen.
pub const TOWER_QUEEN_DAMAGE: i32 = 3;

/// Distance the enemy general is shoved per tick while inside tower range.
pub const TOWER_GENERAL_REPEL_FORCE: f64 = 20.0;

// --- Creeps ---

/// Health a tower-busting creep strips from an adjacent tower each tick.
pub const GIANT_BUST_RATE: i32 = 80;

/// Edge-to-edge gap below which a creep is adjacent to a tower.
pub const MELEE_THRESHOLD: f64 = 10.0;

/// King chasers aim at a point this far from the king's centre.
pub const KING_CHASE_STANDOFF: f64 = 3.0;

/// Player health lost per tick of king contact.
pub const KING_CONTACT_DAMAGE: i32 = 1;

/// Distance between freshly trained creeps and their barracks' centre, past the edge.
pub const CREEP_SPAWN_CLEARANCE: f64 = 5.0;

// --- Players ---

/// Starting player health.
pub const PLAYER_START_HEALTH: i32 = 100;

/// Starting player resources.
pub const PLAYER_START_RESOURCES: i32 = 100;

/// Radius of the king, queen and general units.
pub const HERO_RADIUS: f64 = 30.0;

/// Distance of the heroes' home corner from the map edges.
pub const HERO_CORNER_INSET: f64 = 100.0;

//! Simulation engine: the tick orchestrator.
//!
//! `SimulationEngine` owns the hecs world (creeps), the obstacles and both
//! players. Each tick it applies queued player commands, runs the structure
//! phase, then the creep phase, and produces a `WorldSnapshot`. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use royale_core::catalog::CreepType;
use royale_core::commands::PlayerCommand;
use royale_core::config::{ConfigError, Rules};
use royale_core::enums::{GamePhase, MatchResult, StructureKind};
use royale_core::events::SimEvent;
use royale_core::state::WorldSnapshot;
use royale_core::types::{ObstacleId, PlayerId, SimTime, Vector2};

use crate::error::CommandError;
use crate::obstacle::Obstacle;
use crate::player::{Player, Players};
use crate::structures::{Structure, TickContext};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for map layout. Same seed = same map.
    pub seed: u64,
    pub rules: Rules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: Rules::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rules: Rules,
    obstacles: Vec<Obstacle>,
    players: Players,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Validate the rules and lay out a fresh, seeded map.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.rules.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let obstacles = world_setup::place_obstacles(&mut rng, &config.rules);
        Self::with_obstacles(config.rules, obstacles)
    }

    /// Start a match on a host-supplied layout. Obstacles act in id order;
    /// the rules are validated and every id must be unique.
    pub fn with_obstacles(
        rules: Rules,
        mut obstacles: Vec<Obstacle>,
    ) -> Result<Self, ConfigError> {
        rules.validate()?;
        obstacles.sort_by_key(Obstacle::id);
        if let Some(pair) = obstacles.windows(2).find(|pair| pair[0].id() == pair[1].id()) {
            return Err(ConfigError::DuplicateObstacle(pair[0].id()));
        }
        let players = Players::new(&rules);
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rules,
            obstacles,
            players,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            &self.players,
            &self.obstacles,
            events,
        )
    }

    /// Snapshot the current state without advancing.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            &self.players,
            &self.obstacles,
            Vec::new(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Read-only access to the creep world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id() == id)
    }

    pub fn obstacle_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| o.id() == id)
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Spawn a creep outside of barracks training.
    pub fn spawn_creep(
        &mut self,
        owner: PlayerId,
        creep_type: CreepType,
        location: Vector2,
    ) -> Entity {
        world_setup::spawn_creep(&mut self.world, &mut self.players, owner, creep_type, location)
    }

    /// Damage a creep directly. Returns `true` if it died.
    pub fn damage_creep(&mut self, entity: Entity, amount: i32) -> bool {
        systems::creeps::damage(
            &mut self.world,
            &mut self.players,
            &mut self.despawn_buffer,
            &mut self.events,
            entity,
            amount,
        )
    }

    /// Run one creep's movement step outside the tick loop.
    pub fn move_creep(&mut self, entity: Entity) {
        systems::creeps::move_creep(
            &mut self.world,
            &self.players,
            &self.obstacles,
            &self.rules,
            entity,
        );
    }

    /// Run one creep's damage step outside the tick loop.
    pub fn creep_deal_damage(&mut self, entity: Entity) {
        systems::creeps::deal_damage(
            &mut self.world,
            &mut self.players,
            &mut self.obstacles,
            &self.rules,
            entity,
        );
    }

    /// Apply a command immediately, reporting why it was refused.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        if self.phase != GamePhase::Active {
            return Err(CommandError::MatchFinished);
        }

        match command {
            PlayerCommand::BuildMine { player, obstacle } => {
                let rules = &self.rules;
                let target = buildable(&mut self.obstacles, player, obstacle)?;
                target.set_mine(player, rules);
            }
            PlayerCommand::BuildTower {
                player,
                obstacle,
                health,
            } => {
                if health <= 0 {
                    return Err(CommandError::InvalidTowerHealth(health));
                }
                let rules = &self.rules;
                let target = buildable(&mut self.obstacles, player, obstacle)?;
                target.set_tower(player, health, rules);
            }
            PlayerCommand::BuildBarracks {
                player,
                obstacle,
                creep_type,
            } => {
                let target = buildable(&mut self.obstacles, player, obstacle)?;
                target.set_barracks(player, creep_type);
            }
            PlayerCommand::SetMineRate {
                player,
                obstacle,
                rate,
            } => {
                let target =
                    owned(&mut self.obstacles, player, obstacle, StructureKind::Mine)?;
                let max_rate = target.max_mineral_rate();
                match target.structure_mut() {
                    Some(Structure::Mine(mine)) => mine.set_income_rate(rate, max_rate),
                    _ => return Err(wrong_structure(obstacle, StructureKind::Mine)),
                }
            }
            PlayerCommand::StartTraining { player, obstacle } => {
                let target =
                    owned(&mut self.obstacles, player, obstacle, StructureKind::Barracks)?;
                match target.structure_mut() {
                    Some(Structure::Barracks(barracks)) => barracks.start_training(),
                    _ => return Err(wrong_structure(obstacle, StructureKind::Barracks)),
                }
            }
            PlayerCommand::SetBarracksCreepType {
                player,
                obstacle,
                creep_type,
            } => {
                let target =
                    owned(&mut self.obstacles, player, obstacle, StructureKind::Barracks)?;
                match target.structure_mut() {
                    Some(Structure::Barracks(barracks)) => {
                        if !barracks.set_creep_type(creep_type) {
                            return Err(CommandError::BarracksBusy(obstacle));
                        }
                    }
                    _ => return Err(wrong_structure(obstacle, StructureKind::Barracks)),
                }
            }
            PlayerCommand::MoveHero {
                player,
                hero,
                location,
            } => {
                self.players[player].hero_mut(hero).location = location;
            }
        }
        Ok(())
    }

    /// Process all queued commands. Refused commands are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command.clone()) {
                warn!(tick = self.time.tick, ?command, %err, "command rejected");
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        for player in self.players.iter_mut() {
            player.resources_per_tick = 0;
        }

        // 1. Structures (income, tower fire and melt, training)
        let mut ctx = TickContext {
            world: &mut self.world,
            players: &mut self.players,
            rules: &self.rules,
            events: &mut self.events,
            despawn_buffer: &mut self.despawn_buffer,
        };
        systems::structures::run(&mut self.obstacles, &mut ctx);

        // 2. Creep movement
        systems::creeps::run_movement(
            &mut self.world,
            &self.players,
            &self.obstacles,
            &self.rules,
        );
        // 3. Creep melee
        systems::creeps::run_damage(
            &mut self.world,
            &mut self.players,
            &mut self.obstacles,
            &self.rules,
        );
        // 4. Win condition
        self.check_game_over();
        // 5. Cleanup (dead creeps)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn check_game_over(&mut self) {
        let red_down = self.players[PlayerId::Red].is_defeated();
        let blue_down = self.players[PlayerId::Blue].is_defeated();
        let result = match (red_down, blue_down) {
            (false, false) => return,
            (true, true) => MatchResult::Draw,
            (true, false) => MatchResult::Winner(PlayerId::Blue),
            (false, true) => MatchResult::Winner(PlayerId::Red),
        };
        info!(tick = self.time.tick, ?result, "match finished");
        self.phase = GamePhase::Finished(result);
        self.events.push(SimEvent::GameOver { result });
    }
}

/// Obstacle `id`, provided `player` may build on it: anything but an enemy
/// tower can be built over.
fn buildable(
    obstacles: &mut [Obstacle],
    player: PlayerId,
    id: ObstacleId,
) -> Result<&mut Obstacle, CommandError> {
    let obstacle = find(obstacles, id)?;
    if obstacle.tower_of(player.enemy()).is_some() {
        return Err(CommandError::EnemyTower(id));
    }
    Ok(obstacle)
}

/// Obstacle `id`, provided it holds an `expected` structure owned by `player`.
fn owned(
    obstacles: &mut [Obstacle],
    player: PlayerId,
    id: ObstacleId,
    expected: StructureKind,
) -> Result<&mut Obstacle, CommandError> {
    let obstacle = find(obstacles, id)?;
    let (kind, owner) = match obstacle.structure() {
        Some(structure) => (structure.kind(), structure.owner()),
        None => return Err(wrong_structure(id, expected)),
    };
    if kind != expected {
        return Err(wrong_structure(id, expected));
    }
    if owner != player {
        return Err(CommandError::NotOwner {
            obstacle: id,
            player,
        });
    }
    Ok(obstacle)
}

fn find(obstacles: &mut [Obstacle], id: ObstacleId) -> Result<&mut Obstacle, CommandError> {
    obstacles
        .iter_mut()
        .find(|o| o.id() == id)
        .ok_or(CommandError::UnknownObstacle(id))
}

fn wrong_structure(obstacle: ObstacleId, expected: StructureKind) -> CommandError {
    CommandError::WrongStructure { obstacle, expected }
}

//! Simulation engine — the core of the runner.
//!
//! `SimulationEngine` owns the hecs world, the track streamer, and the
//! per-tick system order. Processes queued player commands at tick
//! boundaries and produces `RunSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use neondrift_core::commands::PlayerCommand;
use neondrift_core::config::SimTuning;
use neondrift_core::constants::TIME_SCALE_MAX;
use neondrift_core::enums::GamePhase;
use neondrift_core::events::SimEvent;
use neondrift_core::state::RunSnapshot;
use neondrift_core::types::{SimTime, Velocity};
use neondrift_track::catalog::{default_catalog, TemplateCatalog};

use crate::streamer::TrackStreamer;
use crate::systems;
use crate::world_setup::{self, CraftSpec};

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same prop placement.
    pub seed: u64,
    pub tuning: SimTuning,
    pub catalog: TemplateCatalog,
    pub craft: CraftSpec,
    /// Initial loop time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: SimTuning::default(),
            catalog: default_catalog(),
            craft: CraftSpec::default(),
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: SimTuning,
    time_scale: f64,
    rng: ChaCha8Rng,
    streamer: TrackStreamer,
    craft_spec: CraftSpec,
    craft: Option<hecs::Entity>,
    steering: f64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let streamer = TrackStreamer::new(
            config.catalog,
            config.tuning.max_active_segments,
            config.tuning.segment_spacing,
        );
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            tuning: config.tuning,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            streamer,
            craft_spec: config.craft,
            craft: None,
            steering: 0.0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
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
    pub fn tick(&mut self) -> RunSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current loop time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The craft entity, once a run has started.
    pub fn craft(&self) -> Option<hecs::Entity> {
        self.craft
    }

    /// Live segment count after housekeeping.
    pub fn active_segments(&mut self) -> usize {
        self.streamer.active_count(&self.world)
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn streamer_mut(&mut self) -> &mut TrackStreamer {
        &mut self.streamer
    }

    #[cfg(test)]
    pub fn clear_segments(&mut self) {
        self.streamer.clear_all(&mut self.world);
    }

    #[cfg(test)]
    pub fn spawn_segment_at(&mut self, origin_z: f64) -> Option<(hecs::Entity, f64)> {
        let mut events = Vec::new();
        let spawned = self
            .streamer
            .spawn_next(&mut self.world, &mut self.rng, origin_z, &mut events);
        self.events.extend(events);
        spawned
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
                    self.start_run();
                }
            }
            PlayerCommand::Restart => {
                if self.phase != GamePhase::Menu {
                    self.start_run();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetSteering { value } => {
                self.steering = value.clamp(-1.0, 1.0);
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, TIME_SCALE_MAX);
            }
        }
    }

    /// Tear down any previous run and set up a fresh one.
    fn start_run(&mut self) {
        self.streamer.clear_all(&mut self.world);
        if let Some(craft) = self.craft.take() {
            let _ = self.world.despawn(craft);
        }

        let (craft, report) = world_setup::spawn_craft(&mut self.world, &self.craft_spec);
        if !report.is_clean() {
            tracing::info!(substituted = ?report.substitutions(), "craft setup used defaults");
        }
        self.craft = Some(craft);

        self.streamer.seed(
            &mut self.world,
            &mut self.rng,
            0.0,
            self.tuning.initial_segments,
            &mut self.events,
        );

        self.steering = 0.0;
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        tracing::info!("run started");
    }

    /// Run all systems in fixed order.
    fn run_systems(&mut self) {
        // 1. Surface strips for this tick's probe and contact checks.
        let strips = systems::collect_surface_strips(&self.world);

        // 2. Locomotion: probe, planar movement, hover, fast fall, banking,
        //    cooldown timer. Forces land in the accumulator.
        systems::locomotion::run(&mut self.world, &self.tuning, &strips, self.steering);

        // 3. Integration + contact resolution; yields collision events.
        let contacts = systems::kinematics::run(&mut self.world, &self.tuning, &strips);

        // 4. Collision-driven bounce.
        systems::bounce::run(&mut self.world, &self.tuning, &contacts, &mut self.events);

        // 5. Prop triggers (gems, obstacles).
        systems::props::run(&mut self.world, &mut self.events, &mut self.despawn_buffer);

        // 6. Segment self-management: spawn-next and retire triggers.
        systems::streaming::run(
            &mut self.world,
            &mut self.streamer,
            &mut self.rng,
            &self.tuning,
            &mut self.events,
        );

        // 7. Registry housekeeping.
        self.streamer.housekeep(&self.world);
        systems::cleanup::sweep_orphan_props(&mut self.world, &mut self.despawn_buffer);

        // 8. Kill plane.
        systems::cleanup::run(&mut self.world, &self.tuning, &mut self.events);

        // Terminal events end the run.
        if self
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::ObstacleHit | SimEvent::CraftFell))
        {
            self.end_run();
        }
    }

    /// Stop the craft and mark the run over.
    fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        if let Some(craft) = self.craft {
            if let Ok(mut vel) = self.world.get::<&mut Velocity>(craft) {
                vel.0 = glam::DVec3::ZERO;
            }
        }
        tracing::info!(
            distance = self.time.elapsed_secs * self.tuning.forward_speed,
            "run ended"
        );
    }
}

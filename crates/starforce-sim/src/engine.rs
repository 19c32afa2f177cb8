//! Game engine: the core of the game.
//!
//! `Engine` owns the hecs ECS world, the collision world and the pending
//! entity queue, applies host commands at frame boundaries, runs all systems
//! and produces `FrameSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starforce_core::commands::PlayerCommand;
use starforce_core::components::{CollisionBody, EntityMarker, Lifecycle};
use starforce_core::config::EngineConfig;
use starforce_core::constants::SPEED_SPIKE_THRESHOLD;
use starforce_core::controls::Controls;
use starforce_core::enums::{Control, EngineState, MouseButton};
use starforce_core::events::{EngineEvent, Sound, SoundRequest};
use starforce_core::state::FrameSnapshot;
use starforce_core::types::{FrameInfo, Transform};

use crate::assets::AssetRegistry;
use crate::error::EngineError;
use crate::physics::CollisionWorld;
use crate::queue::EntityQueue;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::damage::DamageContext;
use crate::systems::plane::SpawnArea;
use crate::world_setup;

/// The game engine. Owns the ECS world and all per-game state.
pub struct Engine {
    world: World,
    physics: CollisionWorld,
    assets: AssetRegistry,
    config: EngineConfig,
    rng: ChaCha8Rng,
    controls: Controls,
    state: EngineState,
    queue: EntityQueue,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,

    // --- Pause conditions ---
    tab_active: bool,
    explicit_pause: bool,

    // --- Clock ---
    /// Seconds of unpaused time.
    elapsed: f64,
    frame_count: u64,

    has_game_started: bool,
    spawn_area: SpawnArea,
    score: ScoreState,

    // --- Outbound ---
    sounds: Vec<SoundRequest>,
    frame_events: Vec<EngineEvent>,
    /// Events not yet drained by the host.
    pending_events: Vec<EngineEvent>,
}

impl Engine {
    /// Validate the config and build the starting world: plane, star field
    /// and a fresh ship, committed immediately.
    pub fn new(config: EngineConfig, assets: AssetRegistry) -> Result<Self, EngineError> {
        config.validate()?;

        let mut engine = Self {
            world: World::new(),
            physics: CollisionWorld::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            assets,
            controls: Controls::with_default_bindings(),
            state: EngineState::Running,
            queue: EntityQueue::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            tab_active: true,
            explicit_pause: false,
            elapsed: 0.0,
            frame_count: 0,
            has_game_started: false,
            spawn_area: SpawnArea::default(),
            score: ScoreState::default(),
            sounds: vec![SoundRequest::play(Sound::Welcome)],
            frame_events: Vec::new(),
            pending_events: Vec::new(),
            config,
        };

        world_setup::spawn_plane(&mut engine.queue, &engine.config);
        world_setup::spawn_star_field(&mut engine.queue, &mut engine.rng, engine.config.initial_stars);
        world_setup::spawn_ship(&mut engine.queue, &engine.assets, &engine.config);
        engine.commit();

        log::info!(
            "Engine created (seed {}, {} entities)",
            engine.config.seed,
            engine.world.len()
        );
        Ok(engine)
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        if self.state == EngineState::Destroyed {
            log::debug!("Dropping command for destroyed engine: {command:?}");
            return;
        }
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        for command in commands {
            self.queue_command(command);
        }
    }

    /// Simulate one frame of `delta` milliseconds and return the snapshot.
    ///
    /// While paused the world is frozen but a snapshot is still produced.
    pub fn frame(&mut self, delta: f64) -> Result<FrameSnapshot, EngineError> {
        if self.state == EngineState::Destroyed {
            return Err(EngineError::Destroyed);
        }

        self.process_commands();
        self.update_pause_state();

        let frame = if self.state == EngineState::Running {
            let frame = self.begin_frame(delta);
            self.run_systems(&frame);
            self.commit();
            self.frame_count += 1;
            frame
        } else {
            FrameInfo {
                delta,
                speed: 0.0,
                elapsed: self.elapsed,
            }
        };

        self.pending_events.extend(self.frame_events.iter().copied());
        Ok(self.build_snapshot(&frame))
    }

    /// Events since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Tear down: release every entity, body, queue and pending event.
    /// Irreversible; later frames fail with [`EngineError::Destroyed`].
    pub fn destroy(&mut self) {
        if self.state == EngineState::Destroyed {
            return;
        }
        log::info!(
            "Destroying engine after {} frames ({} live entities)",
            self.frame_count,
            self.world.len()
        );
        self.world.clear();
        self.physics.clear();
        self.queue.clear();
        self.command_queue.clear();
        self.despawn_buffer.clear();
        self.sounds.clear();
        self.frame_events.clear();
        self.pending_events.clear();
        self.state = EngineState::Destroyed;
    }

    /// Replace the ship and clear meteors, bullets and reactor trails.
    /// Stars, scrap and the plane stay.
    pub fn restart(&mut self) {
        if self.state == EngineState::Destroyed {
            return;
        }
        let doomed: Vec<Entity> = self
            .world
            .query::<(&EntityMarker, &Lifecycle)>()
            .iter()
            .filter(|(_, (marker, lifecycle))| lifecycle.alive && marker.kind.cleared_on_restart())
            .map(|(entity, _)| entity)
            .collect();
        log::info!("Restarting: clearing {} entities", doomed.len());
        for entity in doomed {
            systems::damage::kill(&mut self.world, &mut self.queue, entity);
        }

        world_setup::spawn_ship(&mut self.queue, &self.assets, &self.config);
        self.commit();
        self.score.start(self.elapsed);
    }

    /// Leave the menu: meteor waves begin and the score clock starts.
    pub fn start_game(&mut self) {
        if self.has_game_started {
            return;
        }
        log::info!("Game started");
        self.has_game_started = true;
        self.score.start(self.elapsed);
        self.sounds.push(SoundRequest::play(Sound::Go));
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == EngineState::PausedForFocusLoss
    }

    pub fn has_game_started(&self) -> bool {
        self.has_game_started
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn physics(&self) -> &CollisionWorld {
        &self.physics
    }

    pub fn pending_queue(&self) -> &EntityQueue {
        &self.queue
    }

    /// Direct access for tests that stage specific situations.
    #[cfg(test)]
    pub(crate) fn parts_mut(
        &mut self,
    ) -> (&mut World, &mut EntityQueue, &AssetRegistry, &EngineConfig) {
        (&mut self.world, &mut self.queue, &self.assets, &self.config)
    }

    #[cfg(test)]
    pub(crate) fn commit_pending(&mut self) {
        self.commit();
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Press { control } => {
                self.controls.press(control);
            }
            PlayerCommand::Release { control } => {
                if self.controls.release(control) && control == Control::Mouse(MouseButton::Wheel) {
                    log::debug!("Wheel clicked");
                }
            }
            PlayerCommand::PointerMoved { target, on_screen } => {
                self.controls.set_pointer(target, on_screen);
            }
            PlayerCommand::FocusChanged { active } => {
                self.tab_active = active;
                if !active {
                    self.controls.release_all();
                }
            }
            PlayerCommand::SetPaused { paused } => {
                self.explicit_pause = paused;
            }
            PlayerCommand::SetSpawnArea { left, right } => {
                self.spawn_area = SpawnArea { left, right };
            }
            PlayerCommand::StartGame => self.start_game(),
            PlayerCommand::Restart => self.restart(),
        }
    }

    /// Move between Running and PausedForFocusLoss, emitting one event per
    /// transition.
    fn update_pause_state(&mut self) {
        let should_pause =
            !self.tab_active || !self.controls.pointer_on_screen() || self.explicit_pause;
        match (self.state, should_pause) {
            (EngineState::Running, true) => {
                log::info!("Engine paused");
                self.state = EngineState::PausedForFocusLoss;
                self.frame_events.push(EngineEvent::Pause);
            }
            (EngineState::PausedForFocusLoss, false) => {
                log::info!("Engine resumed");
                self.state = EngineState::Running;
                self.frame_events.push(EngineEvent::Resume);
            }
            _ => {}
        }
    }

    fn begin_frame(&mut self, delta: f64) -> FrameInfo {
        if delta > 0.0 {
            self.elapsed += delta / 1000.0;
        }
        let frame = FrameInfo::from_delta(delta, self.elapsed);
        if frame.speed_deviation().abs() >= SPEED_SPIKE_THRESHOLD {
            log::warn!(
                "Speed variation is too big: {:.3}",
                frame.speed_deviation()
            );
        }
        frame
    }

    /// Run all systems in order.
    fn run_systems(&mut self, frame: &FrameInfo) {
        // 1. Physics step
        let contacts = self.physics.step(&self.world, frame.delta);
        // 2. Contact resolution (damage, deaths)
        {
            let mut ctx = DamageContext {
                queue: &mut self.queue,
                rng: &mut self.rng,
                sounds: &mut self.sounds,
                events: &mut self.frame_events,
                score: &mut self.score,
                now: self.elapsed,
            };
            systems::collision::resolve(&mut self.world, &contacts, &mut ctx);
        }
        // 3. Ship steering, barrier, weapons, reactor
        systems::ship::run(
            &mut self.world,
            &self.controls,
            frame,
            self.config.engine_speed,
            &self.assets,
            &mut self.queue,
            &mut self.sounds,
        );
        // 4. Plane scroll and spawners
        systems::plane::run(
            &mut self.world,
            frame,
            &self.config,
            self.has_game_started,
            self.spawn_area,
            &self.assets,
            &mut self.rng,
            &mut self.queue,
        );
        // 5. Movement integration
        systems::movement::run(&mut self.world, frame);
        // 6. Glow flashes
        systems::glow::run(&mut self.world, frame);
        // 7. Lifespans and star twinkle
        systems::lifetime::run(&mut self.world, &mut self.queue, &mut self.despawn_buffer);
        systems::lifetime::twinkle(&mut self.world, frame);
        // 8. Bounds
        systems::cleanup::run(&mut self.world, &mut self.queue, &mut self.despawn_buffer);
        // 9. Collision bodies follow their transforms
        systems::sync::run(&mut self.world);
    }

    /// Merge the pending queue into the live world:
    /// live = (survivors + new) - removed.
    fn commit(&mut self) {
        let (removals, additions) = self.queue.take();

        for entity in removals {
            self.physics.unregister(entity);
            let _ = self.world.despawn(entity);
        }

        for mut builder in additions {
            let entity = self.world.spawn(builder.build());
            if let Ok((transform, body)) = self
                .world
                .query_one_mut::<(&Transform, &mut CollisionBody)>(entity)
            {
                systems::sync::sync_body(transform, body);
                self.physics.register(entity);
            }
        }
    }

    fn build_snapshot(&mut self, frame: &FrameInfo) -> FrameSnapshot {
        FrameSnapshot {
            state: self.state,
            frame: self.frame_count,
            delta: frame.delta,
            speed: frame.speed,
            elapsed: self.elapsed,
            has_game_started: self.has_game_started,
            nodes: systems::snapshot::build_nodes(&self.world),
            ship: systems::snapshot::build_ship(&self.world),
            score: self.score.view(self.elapsed),
            sounds: std::mem::take(&mut self.sounds),
            events: std::mem::take(&mut self.frame_events),
        }
    }
}

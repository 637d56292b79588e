//! Simulation engine — the per-frame orchestrator.
//!
//! `SimulationEngine` owns the player, every entity system, and the visual
//! store. It processes queued commands at tick boundaries, advances the
//! world one capped time step in a fixed system order, and produces a
//! `GameSnapshot` per tick. Headless and seed-deterministic.

use std::collections::VecDeque;

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crawler_core::commands::{FrameInput, PlayerCommand};
use crawler_core::config::{ArenaConfig, Viewport};
use crawler_core::constants::*;
use crawler_core::enums::GamePhase;
use crawler_core::events::FxEvent;
use crawler_core::state::{
    CameraView, DamageTextView, EnemyView, GameSnapshot, ParticleView, PlayerView,
    ProjectileView, ScoreView,
};
use crawler_core::types::SimTime;

use crate::camera::CameraRig;
use crate::player::PlayerState;
use crate::props::PropStore;
use crate::setup;
use crate::systems::effects::EffectsSystem;
use crate::systems::enemies::EnemySystem;
use crate::systems::projectiles::ProjectileSystem;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    /// Templates and viewport from the surrounding application.
    pub arena: ArenaConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: ArenaConfig::default(),
        }
    }
}

/// The simulation engine. Owns all world state.
pub struct SimulationEngine {
    phase: GamePhase,
    time: SimTime,
    seed: u64,
    rng: ChaCha8Rng,
    viewport: Viewport,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<FxEvent>,

    props: PropStore,
    player: PlayerState,
    camera: CameraRig,
    enemies: EnemySystem,
    projectiles: ProjectileSystem,
    effects: EffectsSystem,
    shots_fired: u32,
}

impl SimulationEngine {
    /// Create a new engine in the menu phase.
    pub fn new(config: SimConfig) -> Self {
        Self {
            phase: GamePhase::Menu,
            time: SimTime::default(),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            viewport: config.arena.viewport,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            props: PropStore::new(config.arena.enemy_templates),
            player: PlayerState::new(),
            camera: CameraRig::new(),
            enemies: EnemySystem::new(ENEMY_CAPACITY),
            projectiles: ProjectileSystem::new(),
            effects: EffectsSystem::new(),
            shots_fired: 0,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot. `dt` is capped so host stalls cannot tunnel projectiles
    /// through enemies or destabilize steering.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) -> GameSnapshot {
        let dt = dt.min(MAX_FRAME_DT);

        self.process_commands();

        if self.phase.is_running() {
            self.step(dt, input);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Menu {
                    self.start_match();
                }
            }
            PlayerCommand::Pause => {
                // Pausing is disabled on end screens.
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Restart => {
                if self.phase != GamePhase::Menu {
                    self.reset_world();
                    self.start_match();
                }
            }
            PlayerCommand::SwapEnemyTemplates { templates } => {
                self.enemies
                    .update_templates(templates, &mut self.props, &mut self.rng);
            }
            PlayerCommand::SetViewport { width, height } => {
                self.viewport = Viewport { width, height };
            }
        }
    }

    fn start_match(&mut self) {
        setup::spawn_opening_wave(
            &mut self.enemies,
            &mut self.props,
            &mut self.rng,
            &mut self.events,
        );
        self.phase = GamePhase::Active;
        self.time = SimTime::default();
        log::info!(
            "match started with {} enemies",
            self.enemies.active_count()
        );
    }

    /// Tear everything down for a fresh match with the same configuration.
    /// The RNG is reseeded, so a restart replays identically.
    fn reset_world(&mut self) {
        let templates = self.props.templates().to_vec();
        self.props = PropStore::new(templates);
        self.player = PlayerState::new();
        self.camera = CameraRig::new();
        self.enemies = EnemySystem::new(ENEMY_CAPACITY);
        self.projectiles = ProjectileSystem::new();
        self.effects = EffectsSystem::new();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.time = SimTime::default();
        self.shots_fired = 0;
        self.events.clear();
    }

    /// One world step. Fixed order: end-game check, player move/aim/fire,
    /// camera follow, projectile advance, enemy steering, collision
    /// resolution, effects. The order is load-bearing — a projectile that
    /// expired this frame must be gone before collisions are tested.
    fn step(&mut self, dt: f32, input: &FrameInput) {
        if self.phase == GamePhase::Active && self.enemies.active_count() == 0 {
            self.trigger_victory();
        }

        // Player movement and aim.
        self.player.translate(input.move_dir, dt);
        let moving = input.move_dir != Vec2::ZERO;
        if self.viewport.is_narrow() && moving {
            let ahead = self.player.position
                + Vec3::new(input.move_dir.x, 0.0, input.move_dir.y);
            self.player.face_toward(ahead);
        } else if let Some(aim) = input.aim {
            self.player.face_toward(aim);
        }

        // Fire control.
        if self.player.fire_cooldown > 0.0 {
            self.player.fire_cooldown -= dt;
        }
        if input.fire && self.player.fire_cooldown <= 0.0 {
            let muzzle = self.player.muzzle();
            let forward = self.player.forward();
            self.projectiles.spawn(muzzle, forward, &mut self.props);
            self.player.fire_cooldown = FIRE_INTERVAL;
            self.shots_fired += 1;
        }

        // Camera trails the player; shake is added on top at snapshot time.
        self.camera.follow(self.player.position, dt);

        // Entity systems, fixed order.
        self.projectiles.update(dt, &mut self.props);

        let Self {
            enemies,
            props,
            player,
            effects,
            events,
            ..
        } = self;
        let player_pos = player.position;
        enemies.update(dt, player_pos, props, |amount| {
            if player.apply_damage(amount) {
                effects.shake(DAMAGE_SHAKE_INTENSITY, DAMAGE_SHAKE_DURATION);
                events.push(FxEvent::Shake {
                    intensity: DAMAGE_SHAKE_INTENSITY,
                    duration: DAMAGE_SHAKE_DURATION,
                });
                events.push(FxEvent::PlayerHpChanged {
                    hp: player.hp,
                    max_hp: player.max_hp,
                });
            }
        });

        self.enemies.check_collisions(
            &mut self.projectiles,
            &mut self.effects,
            &mut self.props,
            &mut self.rng,
            &mut self.events,
        );

        self.effects.update(
            dt,
            &self.camera,
            &self.viewport,
            &mut self.props,
            &mut self.rng,
        );

        if self.phase == GamePhase::Active && self.player.is_dead() {
            self.trigger_defeat();
        }
    }

    /// Transition to Victory. Gated on the Active phase, so repeated
    /// conditions cannot re-fire the end-game effects.
    fn trigger_victory(&mut self) {
        self.phase = GamePhase::Victory;
        self.events.push(FxEvent::Victory);
        log::info!("victory after {:.1}s", self.time.elapsed_secs);
    }

    /// Transition to Defeat: one burst at the player, hide the player,
    /// announce. Gated on the Active phase like victory.
    fn trigger_defeat(&mut self) {
        self.phase = GamePhase::Defeat;
        self.effects.spawn_explosion(
            self.player.position,
            PLAYER_DEATH_COLOR,
            PLAYER_DEATH_PARTICLE_COUNT,
            &mut self.props,
            &mut self.rng,
        );
        self.events.push(FxEvent::Explosion {
            position: self.player.position,
            color: PLAYER_DEATH_COLOR,
            count: PLAYER_DEATH_PARTICLE_COUNT,
        });
        self.player.visible = false;
        self.events.push(FxEvent::Defeat);
        log::info!("defeat after {:.1}s", self.time.elapsed_secs);
    }

    fn build_snapshot(&self, events: Vec<FxEvent>) -> GameSnapshot {
        let shake_offset = self.effects.shake_offset();

        let enemies = self
            .enemies
            .slots()
            .iter()
            .filter(|slot| slot.active)
            .map(|slot| {
                let (yaw, appearance) = slot
                    .visual
                    .and_then(|key| self.props.get(key))
                    .map(|prop| (prop.rotation.y, prop.appearance))
                    .unwrap_or((0.0, crawler_core::enums::Appearance::FallbackBox));
                EnemyView {
                    id: slot.id,
                    position: slot.position,
                    yaw,
                    hp: slot.hp,
                    max_hp: slot.max_hp,
                    appearance,
                }
            })
            .collect();

        let projectiles = self
            .projectiles
            .iter_active()
            .map(|projectile| ProjectileView {
                position: projectile.position,
            })
            .collect();

        let particles = self
            .effects
            .particles()
            .iter()
            .map(|particle| ParticleView {
                position: particle.position,
                rotation: particle.rotation,
                scale: particle.life.max(0.0),
                color: particle.color,
            })
            .collect();

        let damage_texts = self
            .effects
            .texts()
            .iter()
            .map(|text| DamageTextView {
                screen: text.screen,
                opacity: text.opacity,
                amount: text.amount,
                is_crit: text.is_crit,
                visible: text.visible,
            })
            .collect();

        GameSnapshot {
            time: self.time,
            phase: self.phase,
            player: PlayerView {
                position: self.player.position,
                yaw: self.player.yaw,
                hp: self.player.hp,
                max_hp: self.player.max_hp,
                mp: self.player.mp,
                max_mp: self.player.max_mp,
                visible: self.player.visible,
            },
            camera: CameraView {
                position: self.camera.eye(shake_offset),
                shake_offset,
            },
            enemies,
            projectiles,
            particles,
            damage_texts,
            score: ScoreView {
                enemies_spawned: self.enemies.spawned_total(),
                enemies_killed: self.enemies.killed_total(),
                enemies_remaining: self.enemies.active_count() as u32,
                shots_fired: self.shots_fired,
                match_time_secs: self.time.elapsed_secs,
            },
            events,
        }
    }

    // --- Test access ---

    /// Direct damage to the player through the same path melee uses.
    #[cfg(test)]
    pub fn damage_player(&mut self, amount: i32) {
        if self.player.apply_damage(amount) {
            self.effects
                .shake(DAMAGE_SHAKE_INTENSITY, DAMAGE_SHAKE_DURATION);
            self.events.push(FxEvent::PlayerHpChanged {
                hp: self.player.hp,
                max_hp: self.player.max_hp,
            });
        }
    }

    /// Deactivate every enemy without deaths or effects (for end-game tests).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        let props = &mut self.props;
        self.enemies.clear_all(props);
    }
}

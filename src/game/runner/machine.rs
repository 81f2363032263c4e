// The endless-runner game loop

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::engine::assets::ClipProvider;
use crate::engine::physics::intersects;

use super::clips::ClipLibrary;
use super::config::RunnerConfig;
use super::obstacle::Obstacle;
use super::player::PlayerCharacter;
use super::policy::{JumpPolicy, ProximityJump};
use super::render::{RenderSink, Scene};
use super::score::Score;
use super::state::RunnerState;
use super::RunnerError;

/// Emitted once per session, `death_delay` seconds after the runner dies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnd {
    pub final_score: u32,
}

/// Owns one runner, one obstacle and the score, and advances them tick by tick
///
/// Each running tick goes: obstacle advance, player integration, jump
/// decision, collision check, recycle/score, render. Deciding the jump
/// before checking collision means a borderline frame jumps rather than
/// dies. Once dead, the machine only plays out the death clip and counts
/// down to the session-end signal; starting over means building a new
/// machine.
pub struct RunnerStateMachine<R: RenderSink> {
    config: RunnerConfig,
    player: PlayerCharacter,
    obstacle: Obstacle,
    score: Score,
    run_active: bool,

    policy: Box<dyn JumpPolicy>,
    renderer: R,
    rng: SmallRng,

    /// Seconds spent dead so far
    dead_time: f32,
    session_ended: bool,
}

impl<R: RenderSink> RunnerStateMachine<R> {
    /// Build a session, resolving every clip up front
    pub fn new(
        config: RunnerConfig,
        clips: &dyn ClipProvider,
        renderer: R,
    ) -> Result<Self, RunnerError> {
        Self::with_rng(config, clips, renderer, SmallRng::from_entropy())
    }

    /// Build a session with a caller-supplied RNG for spawn jitter
    pub fn with_rng(
        config: RunnerConfig,
        clips: &dyn ClipProvider,
        renderer: R,
        rng: SmallRng,
    ) -> Result<Self, RunnerError> {
        config.validate()?;
        let library = ClipLibrary::resolve(clips)?;

        Ok(Self {
            player: PlayerCharacter::new(&config, library),
            obstacle: Obstacle::new(&config),
            score: Score::new(),
            run_active: false,
            policy: Box::new(ProximityJump::from_config(&config)),
            renderer,
            rng,
            dead_time: 0.0,
            session_ended: false,
            config,
        })
    }

    /// Replace the jump policy
    pub fn with_policy(mut self, policy: impl JumpPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// The start trigger; ignored unless the runner is still idle
    pub fn start(&mut self) {
        if self.run_active || self.player.state() != RunnerState::Idle {
            log::trace!("Ignoring start while {:?}", self.player.state());
            return;
        }

        self.run_active = true;
        self.player.start_run();
        self.obstacle.spawn();
        info!("Run started");
    }

    /// Advance the session by `dt` seconds and draw once
    ///
    /// Returns the session-end signal on the one tick where the post-death
    /// delay runs out.
    pub fn tick(&mut self, dt: f32) -> Option<SessionEnd> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.player.update_animation(dt);

        // The death tick itself does not count toward the delay
        let session_end = if self.player.state() == RunnerState::Dead {
            self.step_dead(dt)
        } else {
            if self.run_active {
                self.step_run(dt);
            }
            None
        };

        let scene = self.scene();
        self.renderer.draw(&scene);

        session_end
    }

    fn step_run(&mut self, dt: f32) {
        self.obstacle.advance(dt, self.config.obstacle_speed);
        self.player.integrate(dt);

        if self
            .policy
            .should_jump(self.obstacle.offset(), self.player.state())
        {
            self.player.start_jump();
        }

        if let Some(obstacle_box) = self.obstacle.bounding_box() {
            let hit = intersects(&self.player.bounding_box(), &obstacle_box);
            if hit && !self.player.state().is_airborne() {
                self.die();
                return;
            }
        }

        if self.obstacle.needs_recycle() {
            self.obstacle.recycle(&mut self.rng, &mut self.score);
            debug!("Score: {}", self.score.value());
        }
    }

    fn die(&mut self) {
        self.player.kill();
        self.run_active = false;
        info!(
            "Runner hit the obstacle at offset {:.2}, score {}",
            self.obstacle.offset(),
            self.score.value()
        );
    }

    fn step_dead(&mut self, dt: f32) -> Option<SessionEnd> {
        if self.session_ended {
            return None;
        }

        self.dead_time += dt;
        if self.dead_time < self.config.death_delay {
            return None;
        }

        self.session_ended = true;
        let end = SessionEnd {
            final_score: self.score.value(),
        };
        info!("Game over! Final score: {}", end.final_score);
        Some(end)
    }

    /// Read-only view handed to the renderer
    pub fn scene(&self) -> Scene {
        Scene {
            state: self.player.state(),
            score: self.score.value(),
            player_position: self.player.position(),
            obstacle_position: self.obstacle.position(),
            obstacle_visible: self.obstacle.is_visible(),
        }
    }

    pub fn state(&self) -> RunnerState {
        self.player.state()
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn is_run_active(&self) -> bool {
        self.run_active
    }

    /// Whether the session-end signal has been emitted
    pub fn is_session_over(&self) -> bool {
        self.session_ended
    }

    pub fn player(&self) -> &PlayerCharacter {
        &self.player
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

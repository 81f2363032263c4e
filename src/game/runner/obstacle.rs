// The single recycled obstacle

use glam::Vec3;
use rand::Rng;

use crate::engine::physics::Aabb;

use super::config::RunnerConfig;
use super::score::ScoreSink;

/// One obstacle, reused for the whole run
///
/// Once it falls far enough behind the player it is moved back ahead of
/// them instead of being replaced, so the track is endless in O(1) memory.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Base position in world space
    position: Vec3,
    visible: bool,
    half_extents: Vec3,

    /// Horizontal position everything is measured from
    anchor_x: f32,
    spawn_distance: f32,
    spawn_jitter: f32,
    recycle_offset: f32,
}

impl Obstacle {
    /// Create the obstacle hidden at its initial spawn position
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            position: Vec3::new(config.player_x + config.spawn_distance, 0.0, 0.0),
            visible: false,
            half_extents: config.obstacle_half_extents,
            anchor_x: config.player_x,
            spawn_distance: config.spawn_distance,
            spawn_jitter: config.spawn_jitter,
            recycle_offset: config.recycle_offset,
        }
    }

    /// Show the obstacle at the initial spawn offset (no jitter on the first pass)
    pub fn spawn(&mut self) {
        self.position.x = self.anchor_x + self.spawn_distance;
        self.visible = true;
    }

    /// Move toward the player by `speed * dt`; hidden obstacles stay put
    pub fn advance(&mut self, dt: f32, speed: f32) {
        if !self.visible {
            return;
        }
        self.position.x -= speed * dt;
    }

    /// Whether the obstacle has fallen behind the recycle threshold
    pub fn needs_recycle(&self) -> bool {
        self.visible && self.offset() < self.recycle_offset
    }

    /// Move back ahead of the player and credit one successful pass
    pub fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R, score: &mut dyn ScoreSink) {
        let jitter = rng.gen::<f32>() * self.spawn_jitter;
        self.position.x = self.anchor_x + self.spawn_distance + jitter;
        score.record_pass();
        log::debug!("Obstacle recycled to offset {:.2}", self.offset());
    }

    /// Horizontal distance ahead of the player (negative once passed)
    pub fn offset(&self) -> f32 {
        self.position.x - self.anchor_x
    }

    /// World-space box, `None` while hidden
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.visible
            .then(|| Aabb::standing_on(self.position, self.half_extents))
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::runner::config::BASE_CONFIG;
    use crate::game::runner::score::Score;
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn spawned() -> Obstacle {
        let mut obstacle = Obstacle::new(&BASE_CONFIG);
        obstacle.spawn();
        obstacle
    }

    #[test]
    fn test_starts_hidden() {
        let obstacle = Obstacle::new(&BASE_CONFIG);
        assert!(!obstacle.is_visible());
        assert!(obstacle.bounding_box().is_none());
        assert!(!obstacle.needs_recycle());
    }

    #[test]
    fn test_spawn_at_base_distance() {
        let obstacle = spawned();
        assert!(obstacle.is_visible());
        assert_eq!(obstacle.offset(), BASE_CONFIG.spawn_distance);
        assert!(obstacle.bounding_box().is_some());
    }

    #[test]
    fn test_hidden_obstacle_does_not_move() {
        let mut obstacle = Obstacle::new(&BASE_CONFIG);
        let before = obstacle.position();
        obstacle.advance(1.0, 5.0);
        assert_eq!(obstacle.position(), before);
    }

    #[test]
    fn test_advance() {
        let mut obstacle = spawned();
        obstacle.advance(0.1, 5.0);
        assert_relative_eq!(obstacle.offset(), 9.5, epsilon = 1e-6);
    }

    #[test]
    fn test_needs_recycle_behind_threshold() {
        let mut obstacle = spawned();
        // 10 -> -10 exactly is not yet behind
        obstacle.advance(4.0, 5.0);
        assert!(!obstacle.needs_recycle());

        obstacle.advance(0.1, 5.0);
        assert!(obstacle.needs_recycle());
    }

    #[test]
    fn test_recycle_respawns_ahead_and_scores() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut score = Score::new();
        let mut obstacle = spawned();
        obstacle.advance(4.5, 5.0);

        obstacle.recycle(&mut rng, &mut score);

        assert_eq!(score.value(), 1);
        assert!(obstacle.offset() >= BASE_CONFIG.spawn_distance);
        assert!(obstacle.offset() <= BASE_CONFIG.spawn_distance + BASE_CONFIG.spawn_jitter);
        assert!(!obstacle.needs_recycle());
    }

    #[test]
    fn test_recycle_jitter_stays_bounded() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut score = Score::new();
        let mut obstacle = spawned();

        for _ in 0..1000 {
            obstacle.recycle(&mut rng, &mut score);
            let offset = obstacle.offset();
            assert!(offset >= 10.0 && offset <= 15.0, "offset {offset} out of range");
        }
        assert_eq!(score.value(), 1000);
    }

    #[test]
    fn test_zero_jitter_is_deterministic() {
        let config = RunnerConfig {
            spawn_jitter: 0.0,
            ..BASE_CONFIG
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let mut score = Score::new();
        let mut obstacle = Obstacle::new(&config);
        obstacle.spawn();
        obstacle.recycle(&mut rng, &mut score);

        assert_eq!(obstacle.offset(), config.spawn_distance);
    }
}

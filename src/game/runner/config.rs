// Runner tuning - one fixed set of numbers per session

use glam::Vec3;

/// Everything that shapes a run
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    // Track
    /// Horizontal position of the player; obstacle offsets are measured from here
    pub player_x: f32,
    /// Obstacle speed toward the player (units/second)
    pub obstacle_speed: f32,
    /// Distance ahead of the player where the obstacle (re)spawns
    pub spawn_distance: f32,
    /// Upper bound of the random extra distance added on recycle
    pub spawn_jitter: f32,
    /// Offset below which the obstacle is behind the player and gets recycled
    pub recycle_offset: f32,

    // Jump
    /// Vertical velocity at take-off (units/second)
    pub launch_velocity: f32,
    /// Vertical acceleration, negative is down (units/second^2)
    pub gravity: f32,
    /// Open interval of obstacle offsets in which the scripted jump fires
    pub proximity_window: (f32, f32),

    // Session
    /// Seconds between death and the session-end signal
    pub death_delay: f32,

    // Dimensions (for the bounding boxes)
    /// Player box half-extents; the box stands on the player's feet
    pub player_half_extents: Vec3,
    /// Obstacle box half-extents; the box stands on the ground
    pub obstacle_half_extents: Vec3,
}

/// The tuning every session starts from
pub const BASE_CONFIG: RunnerConfig = RunnerConfig {
    player_x: 0.0,
    obstacle_speed: 5.0,
    spawn_distance: 10.0,
    spawn_jitter: 5.0,
    recycle_offset: -10.0,

    launch_velocity: 6.0,
    gravity: -9.8,
    proximity_window: (0.0, 2.0),

    death_delay: 2.0,

    // Roughly a character model and a cactus
    player_half_extents: Vec3::new(0.3, 0.9, 0.3),
    obstacle_half_extents: Vec3::new(0.35, 0.6, 0.35),
};

/// Rejected tuning
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("gravity must pull down (got {0})")]
    Gravity(f32),

    #[error("launch velocity must be positive (got {0})")]
    LaunchVelocity(f32),

    #[error("obstacle speed must be positive (got {0})")]
    ObstacleSpeed(f32),

    #[error("spawn distance must be ahead of the player (got {0})")]
    SpawnDistance(f32),

    #[error("spawn jitter must be non-negative (got {0})")]
    SpawnJitter(f32),

    #[error("recycle offset must be behind the player (got {0})")]
    RecycleOffset(f32),

    #[error("death delay must be non-negative (got {0})")]
    DeathDelay(f32),

    #[error("proximity window must be non-empty (got {0}..{1})")]
    ProximityWindow(f32, f32),

    #[error("{name} half-extents must be positive (got {extents})")]
    HalfExtents { name: &'static str, extents: Vec3 },

    #[error("{0} is not a finite number")]
    NotFinite(&'static str),
}

impl Default for RunnerConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl RunnerConfig {
    /// Check that a run with this tuning can actually play out
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("player_x", self.player_x),
            ("obstacle_speed", self.obstacle_speed),
            ("spawn_distance", self.spawn_distance),
            ("spawn_jitter", self.spawn_jitter),
            ("recycle_offset", self.recycle_offset),
            ("launch_velocity", self.launch_velocity),
            ("gravity", self.gravity),
            ("proximity_window.0", self.proximity_window.0),
            ("proximity_window.1", self.proximity_window.1),
            ("death_delay", self.death_delay),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite(*name));
        }
        if !self.player_half_extents.is_finite() {
            return Err(ConfigError::NotFinite("player_half_extents"));
        }
        if !self.obstacle_half_extents.is_finite() {
            return Err(ConfigError::NotFinite("obstacle_half_extents"));
        }

        if self.gravity >= 0.0 {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if self.launch_velocity <= 0.0 {
            return Err(ConfigError::LaunchVelocity(self.launch_velocity));
        }
        if self.obstacle_speed <= 0.0 {
            return Err(ConfigError::ObstacleSpeed(self.obstacle_speed));
        }
        if self.spawn_distance <= 0.0 {
            return Err(ConfigError::SpawnDistance(self.spawn_distance));
        }
        if self.spawn_jitter < 0.0 {
            return Err(ConfigError::SpawnJitter(self.spawn_jitter));
        }
        if self.recycle_offset >= 0.0 {
            return Err(ConfigError::RecycleOffset(self.recycle_offset));
        }
        if self.death_delay < 0.0 {
            return Err(ConfigError::DeathDelay(self.death_delay));
        }

        let (near, far) = self.proximity_window;
        if near >= far {
            return Err(ConfigError::ProximityWindow(near, far));
        }

        for (name, extents) in [
            ("player", self.player_half_extents),
            ("obstacle", self.obstacle_half_extents),
        ] {
            if extents.min_element() <= 0.0 {
                return Err(ConfigError::HalfExtents { name, extents });
            }
        }
        Ok(())
    }

    /// Seconds a jump spends in the air before landing
    pub fn air_time(&self) -> f32 {
        2.0 * self.launch_velocity / -self.gravity
    }

    /// Highest point the player's feet reach during a jump
    pub fn jump_apex(&self) -> f32 {
        self.launch_velocity * self.launch_velocity / (2.0 * -self.gravity)
    }
}

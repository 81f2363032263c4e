// Rendering seam
//
// The gameplay core never draws anything itself. Once per tick it hands the
// renderer a read-only view of the scene and moves on; a renderer that fails
// is the driver's problem, not the core's.

use glam::Vec3;

use super::state::RunnerState;

/// What a renderer gets to see each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub state: RunnerState,
    pub score: u32,
    /// Player feet position
    pub player_position: Vec3,
    /// Obstacle base position; meaningless while hidden
    pub obstacle_position: Vec3,
    pub obstacle_visible: bool,
}

/// Output sink the runner draws through
pub trait RenderSink {
    /// Draw the current scene. Called exactly once per tick.
    fn draw(&mut self, scene: &Scene);
}

impl<R: RenderSink + ?Sized> RenderSink for &mut R {
    fn draw(&mut self, scene: &Scene) {
        (**self).draw(scene);
    }
}

impl<R: RenderSink + ?Sized> RenderSink for Box<R> {
    fn draw(&mut self, scene: &Scene) {
        (**self).draw(scene);
    }
}

/// Headless renderer that only remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct FrameCounter {
    frames: u64,
    last_scene: Option<Scene>,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of draw calls received
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Most recent scene drawn
    pub fn last_scene(&self) -> Option<&Scene> {
        self.last_scene.as_ref()
    }
}

impl RenderSink for FrameCounter {
    fn draw(&mut self, scene: &Scene) {
        self.frames += 1;
        self.last_scene = Some(*scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(score: u32) -> Scene {
        Scene {
            state: RunnerState::Running,
            score,
            player_position: Vec3::ZERO,
            obstacle_position: Vec3::new(10.0, 0.0, 0.0),
            obstacle_visible: true,
        }
    }

    #[test]
    fn test_frame_counter_records_draws() {
        let mut counter = FrameCounter::new();
        assert_eq!(counter.frames(), 0);
        assert!(counter.last_scene().is_none());

        counter.draw(&scene(1));
        counter.draw(&scene(2));

        assert_eq!(counter.frames(), 2);
        assert_eq!(counter.last_scene().map(|s| s.score), Some(2));
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        fn draw_twice<R: RenderSink>(mut sink: R) {
            sink.draw(&scene(0));
            sink.draw(&scene(0));
        }

        let mut counter = FrameCounter::new();
        draw_twice(&mut counter);
        assert_eq!(counter.frames(), 2);
    }
}

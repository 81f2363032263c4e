// Runner animation playback

use crate::engine::assets::{AnimationClip, ClipId};

/// How a clip behaves when it reaches its end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Wrap back to the start
    Loop,
    /// Play once and hold the final pose
    OnceClamped,
}

/// The one clip currently playing
#[derive(Debug, Clone)]
struct ActiveClip {
    clip: AnimationClip,
    mode: PlaybackMode,
    /// Playback position in seconds
    time: f32,
    finished: bool,
}

/// Plays at most one clip at a time on the runner
///
/// Every change of clip goes through [`AnimationPlayer::swap`], which stops
/// whatever was playing before starting the new clip.
#[derive(Debug, Default)]
pub struct AnimationPlayer {
    active: Option<ActiveClip>,
    /// Number of clip swaps requested so far
    swap_count: u64,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop every playing clip
    pub fn stop_all(&mut self) {
        self.active = None;
    }

    /// Stop all clips, then play `clip` from the beginning
    pub fn swap(&mut self, clip: &AnimationClip, mode: PlaybackMode) {
        self.stop_all();
        self.active = Some(ActiveClip {
            clip: clip.clone(),
            mode,
            time: 0.0,
            finished: false,
        });
        self.swap_count += 1;
        log::trace!("Playing clip {:?} ({:?})", clip.id, mode);
    }

    /// Advance playback (called every tick)
    pub fn update(&mut self, dt: f32) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.finished {
            return;
        }

        let duration = active.clip.duration;
        active.time += dt;

        if active.time >= duration {
            match active.mode {
                PlaybackMode::Loop => active.time %= duration,
                PlaybackMode::OnceClamped => {
                    active.time = duration;
                    active.finished = true;
                }
            }
        }
    }

    /// Identifier of the playing clip
    pub fn current_clip(&self) -> Option<ClipId> {
        self.active.as_ref().map(|a| a.clip.id)
    }

    /// Playback position of the current clip in seconds
    pub fn time(&self) -> f32 {
        self.active.as_ref().map_or(0.0, |a| a.time)
    }

    /// Number of clips playing right now (0 or 1)
    pub fn playing_count(&self) -> usize {
        usize::from(self.active.is_some())
    }

    /// Check if a one-shot clip has reached its last frame
    pub fn is_finished(&self) -> bool {
        self.active.as_ref().map_or(true, |a| a.finished)
    }

    /// Total clip swaps so far
    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }
}

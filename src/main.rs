use std::rc::Rc;

use anyhow::{Context, Result};
use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use dino_runner::engine::game_loop::FrameClock;
use dino_runner::engine::input::{Action, InputConfig, InputSource};
use dino_runner::{ClipCatalog, RenderSink, RunnerConfig, RunnerStateMachine, Scene};

/// Renders by keeping the window title in sync with the run
struct TitleRenderer {
    window: Rc<Window>,
    last_title: String,
}

impl TitleRenderer {
    fn new(window: Rc<Window>) -> Self {
        Self {
            window,
            last_title: String::new(),
        }
    }
}

impl RenderSink for TitleRenderer {
    fn draw(&mut self, scene: &Scene) {
        let title = format!("Dino Runner | Score: {} | {:?}", scene.score, scene.state);
        if title != self.last_title {
            self.window.set_title(&title);
            self.last_title = title;
        }
    }
}

/// Optional jitter seed, for replaying the same obstacle spacing
fn seed_from_env() -> Result<Option<u64>> {
    match std::env::var("RUNNER_SEED") {
        Ok(raw) => {
            let seed = raw
                .parse()
                .with_context(|| format!("RUNNER_SEED must be an integer, got '{}'", raw))?;
            Ok(Some(seed))
        }
        Err(_) => Ok(None),
    }
}

/// Build a fresh session drawing into `window`
fn new_session(window: &Rc<Window>, seed: Option<u64>) -> Result<RunnerStateMachine<TitleRenderer>> {
    let config = RunnerConfig::default();
    let clips = ClipCatalog::standard();
    let renderer = TitleRenderer::new(Rc::clone(window));

    let machine = match seed {
        Some(seed) => RunnerStateMachine::with_rng(
            config,
            &clips,
            renderer,
            SmallRng::seed_from_u64(seed),
        )?,
        None => RunnerStateMachine::new(config, &clips, renderer)?,
    };
    Ok(machine)
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Dino Runner...");

    let seed = seed_from_env()?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Rc::new(
        WindowBuilder::new()
            .with_title("Dino Runner")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    let input = InputConfig::with_defaults();
    let mut clock = FrameClock::new();
    let mut machine = new_session(&window, seed)?;

    info!("Press Space to start");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(code),
                                state: ElementState::Pressed,
                                repeat: false,
                                ..
                            },
                        ..
                    },
                ..
            } => match input.get_action(InputSource::key(code)) {
                Some(Action::Start) => machine.start(),
                Some(Action::Quit) => elwt.exit(),
                None => {}
            },
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let dt = clock.begin_frame();

                if let Some(end) = machine.tick(dt) {
                    info!("Final score: {}. Starting a new session", end.final_score);
                    match new_session(&window, seed) {
                        Ok(fresh) => machine = fresh,
                        Err(e) => {
                            error!("Could not start a new session: {:#}", e);
                            elwt.exit();
                        }
                    }
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

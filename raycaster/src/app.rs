use crate::error_continue;
use crate::error_return;
use crate::renderer::context::RendererContext;
use crate::scene::FrameCommand;
use crate::scene::Scene;
use crate::utils::clock::FrameClock;
use crate::window::InputEvent;
use crate::window::WindowContext;
use anyhow::Result;
use glam::IVec2;
use log::error;
use log::info;
use log::Level;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct ApplicationContext {
    // Declared before the window, GL objects must be released while the context is still alive
    pub renderer: RendererContext,
    pub window: WindowContext,

    scene: Option<Box<dyn Scene>>,
    clock: FrameClock,
    target_fps: u32,
    swap_interval: i32,
    running: bool,
}

pub struct ApplicationState<'a> {
    pub window: &'a mut WindowContext,
    pub renderer: &'a mut RendererContext,
}

macro_rules! state {
    ($self:ident) => {
        ApplicationState { window: &mut $self.window, renderer: &mut $self.renderer }
    };
}

impl ApplicationContext {
    pub fn new(title: &str, size: IVec2) -> Result<Self> {
        #[cfg(debug_assertions)]
        simple_logger::init_with_level(Level::Info)?;

        #[cfg(not(debug_assertions))]
        simple_logger::init_with_level(Level::Error)?;

        info!("Raycaster {}", VERSION);

        let window = WindowContext::new(title, size)?;
        let mut renderer = RendererContext::new(window.load_gl_pointers())?;
        renderer.set_viewport(size.as_vec2());

        Ok(Self { renderer, window, scene: None, clock: FrameClock::new(), target_fps: 0, swap_interval: 0, running: true })
    }

    pub fn with_scene(mut self, scene: Box<dyn Scene>) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Zero disables the frame limiter.
    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    pub fn with_swap_interval(mut self, swap_interval: i32) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    pub fn run(mut self) {
        let mut scene = match self.scene.take() {
            Some(scene) => scene,
            None => error_return!("No scene to run"),
        };

        self.window.set_swap_interval(self.swap_interval);

        if let Err(err) = scene.activation(state!(self)) {
            error_return!("Failed to activate scene ({})", err);
        }

        info!("Scene activated, entering main loop");

        while self.running {
            let delta = self.clock.tick(self.target_fps).as_secs_f32();

            while let Some(event) = self.window.poll_event() {
                match event {
                    InputEvent::WindowSizeChange { size } => self.renderer.set_viewport(size.as_vec2()),
                    InputEvent::WindowClose => self.running = false,
                    _ => {}
                }

                match scene.input(state!(self), event) {
                    Ok(command) => self.process_frame_command(command),
                    Err(err) => error_continue!("Failed to process input event {:?} ({})", event, err),
                }
            }

            // A quit request skips the rest of the tick, nothing more is drawn
            if !self.running {
                break;
            }

            self.renderer.begin_frame();

            match scene.frame(state!(self), delta) {
                Ok(command) => self.process_frame_command(command),
                Err(err) => error!("Failed to process frame ({})", err),
            }

            self.renderer.end_frame();
            self.window.swap_buffers();
        }

        if let Err(err) = scene.deactivation(state!(self)) {
            error!("Failed to deactivate scene ({})", err);
        }

        info!("Application terminated");
    }

    fn process_frame_command(&mut self, command: Option<FrameCommand>) {
        match command {
            Some(FrameCommand::Exit) => self.running = false,
            None => {}
        }
    }
}

use raycaster::anyhow::Result;
use raycaster::app::ApplicationContext;
use raycaster::app::ApplicationState;
use raycaster::config::RaycastingConfig;
use raycaster::fastrand::Rng;
use raycaster::log::info;
use raycaster::raycast::debug;
use raycaster::raycast::emitter::RayEmitter;
use raycaster::raycast::world;
use raycaster::raycast::Boundary;
use raycaster::scene::FrameCommand;
use raycaster::scene::Scene;
use raycaster::utils::noise::NoiseWanderer;
use raycaster::window::InputEvent;

struct RaycastingScene {
    config: RaycastingConfig,
    walls: Vec<Boundary>,
    emitter: RayEmitter,
    wanderer: NoiseWanderer,
    rng: Rng,
}

impl RaycastingScene {
    fn new(config: RaycastingConfig) -> Self {
        let emitter = RayEmitter::new(config.screen_size() / 2.0, config.angle_step, config.max_ray_distance());

        let mut wanderer = NoiseWanderer::default();
        wanderer.x_offset = config.noise_x_offset;
        wanderer.y_offset = config.noise_y_offset;
        wanderer.step = config.noise_step;
        wanderer.scale = config.noise_scale;

        Self { config, walls: Vec::new(), emitter, wanderer, rng: Rng::new() }
    }
}

impl Scene for RaycastingScene {
    fn activation(&mut self, _: ApplicationState) -> Result<()> {
        self.walls = world::generate_walls(&mut self.rng, self.config.wall_count, self.config.screen_size());
        info!("Emitter with {} rays ready", self.emitter.rays_count());

        Ok(())
    }

    fn deactivation(&mut self, _: ApplicationState) -> Result<()> {
        self.walls.clear();
        Ok(())
    }

    fn input(&mut self, _: ApplicationState, event: InputEvent) -> Result<Option<FrameCommand>> {
        if event.is_quit_request() {
            return Ok(Some(FrameCommand::Exit));
        }

        Ok(None)
    }

    fn frame(&mut self, state: ApplicationState, _: f32) -> Result<Option<FrameCommand>> {
        let position = self.wanderer.next_position(self.config.screen_size());
        self.emitter.update(position);

        let response = self.emitter.scan(&self.walls);

        debug::draw_walls(state.renderer, &self.walls, &self.config.draw);
        self.emitter.draw(state.renderer, &response, &self.config.draw);

        Ok(None)
    }
}

fn main() -> Result<()> {
    let config = RaycastingConfig::default();
    let app = ApplicationContext::new(&config.title, config.window_size)?
        .with_target_fps(config.target_fps)
        .with_swap_interval(config.swap_interval);

    app.with_scene(Box::new(RaycastingScene::new(config))).run();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycaster::glam::Vec2;

    #[test]
    fn emitter_reach_matches_screen_width() {
        let scene = RaycastingScene::new(RaycastingConfig::default());

        assert_eq!(scene.emitter.max_distance, 400.0);
        assert_eq!(scene.emitter.rays_count(), 36);
        assert_eq!(scene.emitter.position, Vec2::new(200.0, 200.0));
        assert!(scene.walls.is_empty());
    }

    #[test]
    fn wanderer_starts_from_configured_offsets() {
        let scene = RaycastingScene::new(RaycastingConfig::default());

        assert_eq!(scene.wanderer.x_offset, 0.0);
        assert_eq!(scene.wanderer.y_offset, 0.5);
        assert_eq!(scene.wanderer.scale, 3.0);
    }
}

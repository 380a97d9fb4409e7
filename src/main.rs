use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use planet_demo::cli::Cli;
use planet_demo::config::DemoConfig;
use planet_demo::renderer::PlanetRenderer;
use planet_demo::rotation::{Clock, FrameControl, Spinner};
use planet_demo::sphere::create_uv_sphere;
use planet_demo::{Mesh, Transform};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    config: DemoConfig,
    mesh: Mesh,
    show_ui: bool,
    window: Option<Arc<Window>>,
    renderer: Option<PlanetRenderer>,
    planet: Transform,
    spinner: Spinner,
    clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(config: DemoConfig, mesh: Mesh, show_ui: bool) -> Self {
        let mut planet = Transform::IDENTITY;
        planet.set_scale(config.scale[0], config.scale[1], config.scale[2]);
        planet.set_pos(config.position[0], config.position[1], config.position[2]);

        let spinner = Spinner::new(config.spin_degrees_per_second);

        Self {
            config,
            mesh,
            show_ui,
            window: None,
            renderer: None,
            planet,
            spinner,
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Planet Demo")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.window_width,
                        self.config.window_height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(PlanetRenderer::new(
                window.clone(),
                &self.mesh,
                &self.config,
                self.show_ui,
            )) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.update_fps(delta);

                if self.spinner.tick(self.clock.elapsed(), &mut self.planet)
                    == FrameControl::Stop
                {
                    event_loop.exit();
                    return;
                }

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    if let Err(e) = renderer.render(&self.planet, window, self.fps) {
                        eprintln!("Render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let mesh = create_uv_sphere(config.radius, config.slices, config.stacks)?;

    if !cli.no_ui {
        println!(
            "Planet Demo - {} vertices, {} triangles - Escape to quit",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, mesh, !cli.no_ui);
    event_loop.run_app(&mut app)?;

    Ok(())
}

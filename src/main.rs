//! Constellation - animated particle-constellation background
//!
//! Drives the engine from the window's redraw callback: one tick, one
//! CPU-rasterized frame, one blit, every frame until the window closes.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use constellation::config::AppConfig;
use constellation_core::{Bounds, Engine, SimConfig};
use constellation_input::PointerTracker;
use constellation_render::{BlitPipeline, Frame, RenderContext, Renderer};

/// Surfaces narrower than this get the reduced profile below
const SMALL_SURFACE_WIDTH: u32 = 768;
const SMALL_SURFACE_PARTICLES: usize = 60;
const SMALL_SURFACE_POINTER_RADIUS: f32 = 100.0;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Parsed simulation configuration, applied when the engine is created
    sim_config: SimConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    blit: Option<BlitPipeline>,
    frame: Option<Frame>,
    renderer: Renderer,
    engine: Option<Engine>,
    tracker: PointerTracker,
}

impl App {
    fn new(config: AppConfig) -> Self {
        // Bad colors or ranges in the config are start-up failures, not
        // something to limp along with
        let sim_config = config.simulation.to_sim_config().unwrap_or_else(|e| {
            panic!("Invalid simulation config: {}", e);
        });
        let style = config.render.to_render_style().unwrap_or_else(|e| {
            panic!("Invalid render config: {}", e);
        });

        Self {
            config,
            sim_config,
            window: None,
            render_context: None,
            blit: None,
            frame: None,
            renderer: Renderer::new(style),
            engine: None,
            tracker: PointerTracker::new(),
        }
    }

    /// Allocate a fresh frame buffer filled with the background color
    fn fresh_frame(&self, width: u32, height: u32) -> Frame {
        let mut frame = Frame::new(width, height);
        frame.fill(self.renderer.style().background);
        frame
    }

    fn update_title(&self) {
        let (Some(window), Some(engine)) = (&self.window, &self.engine) else {
            return;
        };
        if !self.config.debug.show_overlay {
            return;
        }
        let state = if engine.is_paused() { " [paused]" } else { "" };
        window.set_title(&format!(
            "{} - {} particles, {} links{}",
            self.config.window.title,
            engine.particles().len(),
            engine.connections().len(),
            state,
        ));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // A surface we cannot draw on is fatal; nothing to retry
            let render_context = pollster::block_on(RenderContext::new(window.clone()))
                .unwrap_or_else(|e| panic!("Failed to initialize drawing surface: {}", e));

            let size = render_context.size;
            let width = size.width.max(1);
            let height = size.height.max(1);

            let blit = BlitPipeline::new(
                &render_context.device,
                render_context.config.format,
                width,
                height,
            );
            let frame = self.fresh_frame(width, height);

            let mut engine = Engine::new(
                self.sim_config.clone(),
                Bounds::new(width as f32, height as f32),
            );

            // Reduced profile for small surfaces
            if width < SMALL_SURFACE_WIDTH {
                engine.set_particle_count(SMALL_SURFACE_PARTICLES);
                engine.set_pointer_radius(SMALL_SURFACE_POINTER_RADIUS);
                log::info!("Small surface detected, using the reduced profile");
            }

            log::info!(
                "Constellation started: {}x{}, {} particles",
                width,
                height,
                engine.particles().len()
            );

            window.request_redraw();

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.blit = Some(blit);
            self.frame = Some(frame);
            self.engine = Some(engine);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if physical_size.width == 0 || physical_size.height == 0 {
                    return;
                }
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                if let (Some(ctx), Some(blit)) = (&self.render_context, &mut self.blit) {
                    blit.resize(&ctx.device, physical_size.width, physical_size.height);
                }
                self.frame = Some(self.fresh_frame(physical_size.width, physical_size.height));
                // Regenerating between ticks keeps the batch swap atomic
                if let Some(engine) = &mut self.engine {
                    engine.resize(Bounds::new(
                        physical_size.width as f32,
                        physical_size.height as f32,
                    ));
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => {
                            event_loop.exit();
                        }
                        KeyCode::Space => {
                            if let Some(engine) = &mut self.engine {
                                if engine.is_paused() {
                                    engine.resume();
                                } else {
                                    engine.pause();
                                }
                            }
                        }
                        KeyCode::KeyR => {
                            if let Some(engine) = &mut self.engine {
                                engine.regenerate();
                            }
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::Occluded(occluded) => {
                // No point simulating a window nobody can see
                if let Some(engine) = &mut self.engine {
                    if occluded {
                        engine.pause();
                    } else {
                        engine.resume();
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.tracker.process_cursor_moved(position);
            }

            WindowEvent::CursorLeft { .. } => {
                self.tracker.process_cursor_left();
            }

            WindowEvent::Touch(touch) => {
                self.tracker.process_touch(touch.phase, touch.location);
            }

            WindowEvent::RedrawRequested => {
                let (Some(engine), Some(frame), Some(blit)) =
                    (&mut self.engine, &mut self.frame, &self.blit)
                else {
                    return;
                };

                // The tick reads the latest pointer snapshot, never a
                // half-written one
                engine.tick(self.tracker.mailbox().latest());
                self.renderer.draw_engine(frame, engine);

                if let Some(ctx) = &self.render_context {
                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(ctx) = &mut self.render_context {
                                ctx.resize(ctx.size);
                            }
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Frame Encoder"),
                            });

                    blit.upload(&ctx.queue, frame);
                    blit.render(&mut encoder, &view);

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                self.update_title();

                // Keep the animation running until the window goes away
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Load configuration first so the logger can honor the configured level
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Constellation");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}

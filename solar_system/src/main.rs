//! Solar System
//!
//! A sun and a planet pulling on each other, drawn as filled circles.
//! Physics runs once per frame after the frame is drawn, with the time
//! the previous frame took.
//!
//! Controls:
//! - 2: Recentre the sun and drop the planet at the cursor
//! - Space: Push the planet toward the cursor
//! - Q: Remove the planet from the simulation
//! - Up/Down: Change the planet's mass
//! - Esc: Quit

mod equations_ui;
mod renderer;

use anyhow::Result;
use common::{Camera2D, GraphicsContext};
use equations_ui::{draw_equations_sidebar, SOLAR_SYSTEM_EQUATIONS, SOLAR_SYSTEM_VARIABLES};
use glam::Vec2;
use renderer::Renderer;
use solar_system::{
    clock::FrameClock,
    config::SimConfig,
    controls::command_for_key,
    scene::Scene,
};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

const MAX_BODIES: usize = 16;

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    scene: Scene,
    camera: Camera2D,
    cursor: Vec2,
    clock: FrameClock,
    dt: f32,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext, config: &SimConfig) -> Self {
        let renderer = Renderer::new(&ctx, MAX_BODIES, config.background);
        let viewport = ctx.viewport();
        let camera = Camera2D::new(viewport);
        let scene = Scene::new(config, viewport);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            scene,
            camera,
            cursor: Vec2::ZERO,
            clock: FrameClock::new(config.fps, config.max_dt),
            dt: 0.0,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        let viewport = self.ctx.viewport();
        self.camera.update_viewport(viewport);
        self.scene.set_viewport(viewport);
    }

    /// Draw the current state, then advance physics and wait out the frame.
    ///
    /// Physics and the clock keep running when the surface is unavailable,
    /// so a dropped frame does not stretch the next dt.
    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let rendered = self.render();
        let scene = &mut self.scene;
        self.dt = self.clock.finish_frame(self.dt, |dt| scene.advance(dt));
        rendered
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        let num_instances = self
            .renderer
            .update_instances(&self.ctx.queue, self.scene.drawables());

        // Build egui UI
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let planet = self.scene.planet();
        let fps = if self.dt > 0.0 { 1.0 / self.dt } else { 0.0 };
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_equations_sidebar(
                ctx,
                "Solar System",
                SOLAR_SYSTEM_EQUATIONS,
                SOLAR_SYSTEM_VARIABLES,
            );

            egui::TopBottomPanel::top("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Planet mass: {:.0}", planet.mass));
                    ui.separator();
                    ui.label(format!("Speed: {:.1}", planet.velocity.length()));
                    ui.separator();
                    if planet.active {
                        ui.label(egui::RichText::new("ACTIVE").color(egui::Color32::GREEN));
                    } else {
                        ui.label("Press 2 to place the planet");
                    }
                    ui.separator();
                    ui.label(format!("{:.0} fps", fps));
                });
            });
        });

        self.egui.state.handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self.egui.ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui.renderer.update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, num_instances);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Returns `false` once the app should exit.
    fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) -> bool {
        match command_for_key(key, state, repeat) {
            Some(command) => self.scene.apply(command, self.cursor),
            None => true,
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }
}

fn main() -> Result<()> {
    let config = SimConfig::from_env();
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        &config.title,
        config.width,
        config.height,
    ))?;
    log::info!(
        "starting {}x{} at {} fps, G = {}",
        config.width,
        config.height,
        config.fps,
        config.gravitational_constant
    );

    let mut app = App::new(ctx, &config);

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.handle_window_event(event);

                if !consumed {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => app.resize(*size),
                        WindowEvent::CursorMoved { position, .. } => {
                            app.cursor = Vec2::new(position.x as f32, position.y as f32);
                        }
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(key),
                                    state,
                                    repeat,
                                    ..
                                },
                            ..
                        } => {
                            if !app.handle_key(*key, *state, *repeat) {
                                elwt.exit();
                            }
                        }
                        WindowEvent::RedrawRequested => match app.frame() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => {
                                log::warn!("surface lost, reconfiguring");
                                app.resize(app.ctx.size);
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("out of GPU memory");
                                elwt.exit();
                            }
                            Err(e) => log::warn!("render error: {:?}", e),
                        },
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

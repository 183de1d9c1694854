//! Application state and winit lifecycle.
//!
//! The shell owns the window, translates winit mouse/touch events into the
//! core pointer model, supplies widget geometry on every resize and runs the
//! egui pass that draws the controls and the inspector overlay.

use std::sync::Arc;

use envpad_core::{AxisRange, Orientation, PointerEvent, PointerId, Slider, ValueArea};
use kurbo::{Point, Rect};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::graphics::Graphics;
use crate::ui::{render_ui, UiState};

/// Window configuration for the shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "EnvPad".to_string(),
            width: 900,
            height: 680,
        }
    }
}

/// Margin between the window edge and the controls, in logical pixels.
const MARGIN: f64 = 48.0;
/// Height of the attack slider strip below the pad.
const SLIDER_HEIGHT: f64 = 56.0;
/// Gap between the pad and the slider strip.
const GAP: f64 = 16.0;

/// Top-level application: configuration plus lazily-initialized state.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
}

/// Everything that exists only once the window is up.
struct AppState {
    window: Arc<Window>,
    graphics: Graphics,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,
    /// The two-dimensional envelope pad.
    pad: ValueArea,
    /// Legacy single-axis attack-time slider.
    attack: Slider,
    /// Last known cursor position in logical coordinates.
    cursor_position: Point,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Build the event loop and run until the window closes.
    pub fn run() {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let mut app = App::new(AppConfig::default());
        event_loop.run_app(&mut app).expect("Event loop error");
    }
}

impl AppState {
    /// Layout pass: position the pad and the slider strip inside the window.
    fn layout(&mut self, size: LogicalSize<f64>) {
        let pad_bottom = (size.height - MARGIN - SLIDER_HEIGHT - GAP).max(MARGIN);
        self.pad
            .set_bounds(Rect::new(MARGIN, MARGIN, size.width - MARGIN, pad_bottom));
        self.attack.set_bounds(Rect::new(
            MARGIN,
            pad_bottom + GAP,
            size.width - MARGIN,
            pad_bottom + GAP + SLIDER_HEIGHT,
        ));
    }

    /// Convert a winit physical position into widget space.
    fn to_widget_space(&self, position: PhysicalPosition<f64>) -> Point {
        let logical = position.to_logical::<f64>(self.window.scale_factor());
        Point::new(logical.x, logical.y)
    }

    /// Offer an event to the pad, then to the slider. Unhandled events fall
    /// through, mirroring sibling propagation in the host toolkit.
    fn dispatch(&mut self, event: PointerEvent) -> bool {
        self.pad.handle_pointer_event(&event) || self.attack.handle_pointer_event(&event)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let graphics = pollster::block_on(Graphics::new(window.clone(), size.width, size.height))
            .expect("Failed to initialize graphics");

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &graphics.device,
            graphics.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let pad = ValueArea::new(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 100.0))
            .with_padding(12.0);
        let attack = Slider::new(
            AxisRange::new(0.0, 1.0).with_step(0.05),
            Orientation::Horizontal,
        );

        let mut state = AppState {
            window: window.clone(),
            graphics,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
            pad,
            attack,
            cursor_position: Point::ZERO,
        };
        state.layout(size.to_logical(window.scale_factor()));

        self.state = Some(state);
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first.
        let egui_response = state.egui_state.on_window_event(&state.window, &event);

        // Presses over egui areas stay with egui. Moves and releases are
        // always forwarded: a held grab must see its own move/up regardless
        // of what the cursor is over.
        let egui_wants_pointer = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                state.graphics.resize(size.width, size.height);
                state.layout(size.to_logical(state.window.scale_factor()));
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.cursor_position = state.to_widget_space(position);
                state.dispatch(PointerEvent::Moved {
                    pointer: PointerId::MOUSE,
                    position: state.cursor_position,
                });
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button: MouseButton::Left,
                ..
            } => {
                let position = state.cursor_position;
                match btn_state {
                    ElementState::Pressed => {
                        if egui_wants_pointer {
                            return;
                        }
                        state.dispatch(PointerEvent::Down {
                            pointer: PointerId::MOUSE,
                            position,
                        });
                    }
                    ElementState::Released => {
                        state.dispatch(PointerEvent::Up {
                            pointer: PointerId::MOUSE,
                            position,
                        });
                    }
                }
            }

            WindowEvent::Touch(touch) => {
                // Host touch ids are offset past the reserved mouse id so
                // grab ownership distinguishes every pointer.
                let pointer = PointerId(touch.id + 1);
                let position = state.to_widget_space(touch.location);
                match touch.phase {
                    TouchPhase::Started => {
                        if egui_wants_pointer {
                            return;
                        }
                        state.dispatch(PointerEvent::Down { pointer, position });
                    }
                    TouchPhase::Moved => {
                        state.dispatch(PointerEvent::Moved { pointer, position });
                    }
                    TouchPhase::Ended => {
                        state.dispatch(PointerEvent::Up { pointer, position });
                    }
                    TouchPhase::Cancelled => {
                        state.dispatch(PointerEvent::Cancelled { pointer });
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let egui_input = state.egui_state.take_egui_input(&state.window);
                let egui_output = state.egui_ctx.run(egui_input, |ctx| {
                    render_ui(ctx, &mut state.ui_state, &mut state.pad, &mut state.attack);
                });

                state
                    .egui_state
                    .handle_platform_output(&state.window, egui_output.platform_output);
                let primitives = state
                    .egui_ctx
                    .tessellate(egui_output.shapes, egui_output.pixels_per_point);

                let surface_texture = match state.graphics.surface.get_current_texture() {
                    Ok(t) => t,
                    Err(e) => {
                        log::warn!("Failed to get surface texture: {:?}", e);
                        return;
                    }
                };
                let surface_view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                for (id, image_delta) in &egui_output.textures_delta.set {
                    state.egui_renderer.update_texture(
                        &state.graphics.device,
                        &state.graphics.queue,
                        *id,
                        image_delta,
                    );
                }

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [state.graphics.config.width, state.graphics.config.height],
                    pixels_per_point: egui_output.pixels_per_point,
                };

                let mut encoder = state.graphics.device.create_command_encoder(
                    &wgpu::CommandEncoderDescriptor {
                        label: Some("egui encoder"),
                    },
                );
                state.egui_renderer.update_buffers(
                    &state.graphics.device,
                    &state.graphics.queue,
                    &mut encoder,
                    &primitives,
                    &screen_descriptor,
                );

                {
                    let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui render pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &surface_view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: 0.97,
                                    g: 0.97,
                                    b: 0.98,
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        })],
                        depth_stencil_attachment: None,
                        timestamp_writes: None,
                        occlusion_query_set: None,
                    });

                    // forget_lifetime satisfies egui-wgpu's 'static requirement.
                    let mut render_pass = render_pass.forget_lifetime();
                    state
                        .egui_renderer
                        .render(&mut render_pass, &primitives, &screen_descriptor);
                }

                state
                    .graphics
                    .queue
                    .submit(std::iter::once(encoder.finish()));

                for id in &egui_output.textures_delta.free {
                    state.egui_renderer.free_texture(id);
                }
                surface_texture.present();
                state.window.request_redraw();
            }

            _ => {}
        }
    }
}

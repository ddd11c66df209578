//! The run-loop: one `tick` per display refresh, driven by the host.
//!
//! Single-threaded and cooperative. Input events are queued by the host and
//! applied in arrival order at the start of the next tick, so the order in
//! which the host interleaves events and frames is preserved exactly.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use crate::api::config::SimulationConfig;
use crate::api::types::{BodyId, MeshHandle, UiEvent};
use crate::core::context::SimulationContext;
use crate::core::integrator;
use crate::core::registry::BodyRegistry;
use crate::core::rng::Rng;
use crate::core::starfield::Starfield;
use crate::core::time::FrameClock;
use crate::error::OrreryResult;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::{CameraController, Viewport};
use crate::renderer::color::Color;
use crate::renderer::traits::{Geometry, Material, MaterialKind, RenderBackend, TooltipSink};
use crate::systems::picking::{self, PickResult};
use crate::systems::tooltip;

const SPHERE_SEGMENTS: u32 = 32;
const RING_SEGMENTS: u32 = 64;
/// Half-width of the orbit ring annulus.
const RING_HALF_WIDTH: f32 = 0.1;
const RING_COLOR: u32 = 0x444444;
const RING_OPACITY: f32 = 0.3;
const PLANET_SHININESS: f32 = 100.0;
const STAR_EMISSIVE: f32 = 0.3;

/// Simulation core wired to its two collaborators.
pub struct Simulation<R: RenderBackend, T: TooltipSink> {
    config: SimulationConfig,
    ctx: SimulationContext,
    registry: BodyRegistry,
    camera: CameraController,
    starfield: Starfield,
    rng: Rng,
    clock: FrameClock,
    input: InputQueue,
    /// UI feedback produced by the current tick.
    events: Vec<UiEvent>,
    /// Last pointer position over the surface, for hover picking.
    pointer: Option<Vec2>,
    hovered: Option<PickResult>,
    /// Indexed by `BodyId`.
    body_meshes: Vec<MeshHandle>,
    starfield_mesh: MeshHandle,
    renderer: R,
    tooltip: T,
    frame: u64,
}

impl<R: RenderBackend, T: TooltipSink> Simulation<R, T> {
    /// Build the bodies and hand the scene to the renderer.
    pub fn new(
        config: SimulationConfig,
        viewport: Viewport,
        mut renderer: R,
        tooltip: T,
    ) -> OrreryResult<Self> {
        config.validate()?;

        let mut rng = Rng::new(config.seed);
        let registry = BodyRegistry::create(&config, &mut rng);
        let starfield = Starfield::generate(&config.starfield, &mut rng);
        let camera = CameraController::new(&config.camera, viewport);

        let mut body_meshes = Vec::with_capacity(registry.len());
        for body in registry.iter() {
            let geometry = Geometry::Sphere {
                radius: body.radius,
                segments: SPHERE_SEGMENTS,
            };
            let material = if body.is_star() {
                Material::new(body.color, MaterialKind::Basic).with_emissive(STAR_EMISSIVE)
            } else {
                Material::new(body.color, MaterialKind::Phong { shininess: PLANET_SHININESS })
            };
            body_meshes.push(renderer.create_mesh(&geometry, &material));
        }

        let ring_material = Material::new(Color::from_hex(RING_COLOR), MaterialKind::Basic)
            .with_opacity(RING_OPACITY);
        for body in registry.planets() {
            let d = body.orbit_distance();
            let ring = renderer.create_mesh(
                &Geometry::Ring {
                    inner: (d - RING_HALF_WIDTH).max(0.0),
                    outer: d + RING_HALF_WIDTH,
                    segments: RING_SEGMENTS,
                },
                &ring_material,
            );
            renderer.set_rotation(ring, Vec3::new(-FRAC_PI_2, 0.0, 0.0));
        }

        let starfield_mesh = renderer.create_mesh(
            &Geometry::Points {
                positions: starfield.positions().to_vec(),
            },
            &Material::new(Color::WHITE, MaterialKind::Points { size: config.starfield.point_size }),
        );

        let mut sim = Self {
            clock: FrameClock::new(config.step_mode),
            config,
            ctx: SimulationContext::new(),
            registry,
            camera,
            starfield,
            rng,
            input: InputQueue::new(),
            events: Vec::with_capacity(16),
            pointer: None,
            hovered: None,
            body_meshes,
            starfield_mesh,
            renderer,
            tooltip,
            frame: 0,
        };
        sim.sync_renderer();
        log::info!("simulation: scene built, {} meshes", sim.body_meshes.len());
        Ok(sim)
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, integrate unless paused, pick, render,
    /// and always request the next frame.
    pub fn tick(&mut self, frame_dt: f32) {
        self.events.clear();

        for event in self.input.drain() {
            self.handle_input(event);
        }

        if !self.ctx.paused {
            let steps = self.clock.steps(frame_dt);
            for _ in 0..steps {
                integrator::step(&mut self.registry, self.config.time_step);
                self.starfield.tick();
            }
        }

        self.sync_renderer();
        self.update_hover();
        self.renderer.render_frame(&self.camera.camera().view());
        self.renderer.request_animation_frame();
        self.frame += 1;
    }

    /// Apply one input event immediately.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                let pos = Vec2::new(x, y);
                self.camera.pointer_down(pos);
                self.pointer = Some(pos);
            }
            InputEvent::PointerMove { x, y } => {
                let pos = Vec2::new(x, y);
                self.camera.pointer_move(pos);
                self.pointer = Some(pos);
            }
            InputEvent::PointerUp { .. } => {
                self.camera.pointer_up();
            }
            InputEvent::PointerLeave => {
                if let Some(last) = self.pointer.take() {
                    tooltip::present(&mut self.tooltip, None, last);
                }
                self.hovered = None;
            }
            InputEvent::Wheel { delta_y } => {
                self.camera.wheel(delta_y);
                log::debug!("camera: radius {:.2}", self.camera.camera().radius);
            }
            InputEvent::SetSpeed { body, speed } => {
                self.set_speed(body, speed);
            }
            InputEvent::TogglePause => {
                let paused = self.ctx.toggle_pause();
                self.clock.reset();
                self.events.push(UiEvent::paused(paused));
                log::debug!("simulation: paused={}", paused);
            }
            InputEvent::Reset => self.reset_system(),
            InputEvent::ToggleTheme => {
                let theme = self.ctx.toggle_theme();
                self.events.push(UiEvent::theme(theme.is_dark()));
                log::debug!("simulation: theme {:?}", theme);
            }
            InputEvent::Resize { width, height } => {
                self.camera.resize(Viewport::new(width, height));
            }
        }
    }

    /// Slider input. Unknown bodies are logged and ignored.
    pub fn set_speed(&mut self, body: BodyId, speed: f64) {
        match self.registry.set_speed(body, speed) {
            Ok(()) => self.events.push(UiEvent::speed(body, speed)),
            Err(err) => log::warn!("set_speed ignored: {}", err),
        }
    }

    /// Default speeds, fresh random phases, and resume. Emits a speed event per
    /// planet so the host can resync its sliders.
    pub fn reset_system(&mut self) {
        self.registry.reset_speeds(&mut self.rng);
        self.ctx.paused = false;
        self.clock.reset();
        for body in self.registry.planets() {
            self.events.push(UiEvent::speed(body.id, body.current_speed));
        }
        self.events.push(UiEvent::paused(false));
        log::info!("simulation: reset");
    }

    fn sync_renderer(&mut self) {
        for body in self.registry.iter() {
            let mesh = self.body_meshes[body.id.index()];
            self.renderer.set_position(mesh, body.position());
            self.renderer.set_rotation(mesh, Vec3::new(0.0, body.spin, 0.0));
        }
        self.renderer
            .set_rotation(self.starfield_mesh, Vec3::new(0.0, self.starfield.rotation, 0.0));
    }

    fn update_hover(&mut self) {
        let Some(pointer) = self.pointer else {
            return;
        };
        self.hovered = picking::pick(self.camera.camera(), pointer, self.registry.iter());
        tooltip::present(&mut self.tooltip, self.hovered.as_ref(), pointer);
    }

    // -- Accessors --

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn tooltip(&self) -> &T {
        &self.tooltip
    }

    /// Body currently under the pointer, as of the last tick.
    pub fn hovered(&self) -> Option<&PickResult> {
        self.hovered.as_ref()
    }

    /// UI events produced by the last tick.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    pub fn mesh_for(&self, body: BodyId) -> Option<MeshHandle> {
        self.body_meshes.get(body.index()).copied()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

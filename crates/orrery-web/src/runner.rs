use orrery_engine::bridge::protocol::pack_header;
use orrery_engine::{
    BodyId, InputEvent, InstanceBuffer, OrreryResult, Simulation, SimulationConfig, TooltipState,
    UiEvent, Viewport, HEADER_FLOATS,
};

/// Wires the simulation to the flat buffers the host reads.
///
/// `lib.rs` keeps one of these in a `thread_local!` and exports free functions
/// via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs.
pub struct SimulationRunner {
    sim: Simulation<InstanceBuffer, TooltipState>,
    header: [f32; HEADER_FLOATS],
    /// Set by `tick`; the host keeps its animation loop alive while true.
    frame_requested: bool,
}

impl SimulationRunner {
    pub fn new(config: SimulationConfig, viewport: Viewport) -> OrreryResult<Self> {
        let sim = Simulation::new(config, viewport, InstanceBuffer::new(), TooltipState::default())?;
        let mut runner = Self {
            sim,
            header: [0.0; HEADER_FLOATS],
            frame_requested: true,
        };
        runner.pack();
        Ok(runner)
    }

    /// Parse a JSON config. An empty string means the default scene.
    /// `seed` overrides the config's seed when given.
    pub fn from_json(json: &str, seed: Option<u64>, viewport: Viewport) -> OrreryResult<Self> {
        let mut config = if json.trim().is_empty() {
            SimulationConfig::default()
        } else {
            SimulationConfig::from_json(json)?
        };
        if let Some(seed) = seed {
            config.seed = seed;
        }
        Self::new(config, viewport)
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.sim.push_input(event);
    }

    /// Run one frame and repack the header. Returns whether another frame was requested.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.sim.tick(dt);
        self.frame_requested = self.sim.renderer_mut().take_frame_request();
        self.pack();
        self.frame_requested
    }

    fn pack(&mut self) {
        let count = self.sim.renderer().instance_count();
        self.header = pack_header(&self.sim, count);
    }

    pub fn simulation(&self) -> &Simulation<InstanceBuffer, TooltipState> {
        &self.sim
    }

    pub fn set_speed(&mut self, body: u32, speed: f64) {
        self.push_input(InputEvent::SetSpeed {
            body: BodyId(body),
            speed,
        });
    }

    /// Default speed of a body, for initializing the host's sliders.
    pub fn base_speed(&self, body: u32) -> Option<f64> {
        self.sim.registry().get(BodyId(body)).map(|b| b.base_speed())
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header_len(&self) -> u32 {
        HEADER_FLOATS as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.sim.renderer().instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.sim.renderer().instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.sim.events().as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.sim.events().len() as u32
    }

    pub fn events(&self) -> &[UiEvent] {
        self.sim.events()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    // ---- Text accessors ----

    /// Mesh descriptors for the host to build its scene graph once after init.
    pub fn scene_json(&self) -> String {
        match self.sim.renderer().scene_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("scene_json failed: {}", err);
                String::from("[]")
            }
        }
    }

    pub fn tooltip_text(&self) -> String {
        self.sim.tooltip().text.clone()
    }

    pub fn background(&self) -> String {
        self.sim.context().theme.background().to_string()
    }
}

use crate::surface::{DrawSurface, HostMetrics};
use crate::wave::{WaveEngine, WaveParams};

/// One-way lifecycle of a render loop. A stopped loop never runs again;
/// restarting means building a fresh instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl LoopState {
    /// Idle -> Running. Returns false, changing nothing, if the loop
    /// already started or was stopped.
    pub fn begin(&mut self) -> bool {
        if *self == LoopState::Idle {
            *self = LoopState::Running;
            true
        } else {
            false
        }
    }

    /// Any state -> Stopped. Returns true only on the first effective
    /// stop, so callers can release resources exactly once.
    pub fn halt(&mut self) -> bool {
        if *self == LoopState::Stopped {
            false
        } else {
            *self = LoopState::Stopped;
            true
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

/// A running hero wave bound to one host surface: engine + capability
/// implementations + loop state. The host side owns scheduling; this
/// type owns everything else, including the guarantee that a frame or
/// resize arriving after `detach` does nothing.
pub struct WaveInstance<H: HostMetrics, S: DrawSurface> {
    engine: WaveEngine,
    host: H,
    surface: S,
    state: LoopState,
}

impl<H: HostMetrics, S: DrawSurface> WaveInstance<H, S> {
    /// Bind to a surface and start. A missing surface means the feature
    /// is unavailable on this page: the result is `None`, no drawing
    /// call is ever issued, and nothing is treated as an error.
    pub fn attach(host: H, surface: Option<S>, params: WaveParams) -> Option<Self> {
        let surface = surface?;
        let engine = match WaveEngine::new(params) {
            Ok(engine) => engine,
            Err(e) => {
                log::warn!("[wave] rejected config: {e}");
                return None;
            }
        };
        let mut instance = Self {
            engine,
            host,
            surface,
            state: LoopState::Idle,
        };
        instance.state.begin();
        // size the backing store before the first frame
        instance.on_resize();
        Some(instance)
    }

    pub fn on_resize(&mut self) {
        if self.state.is_running() {
            self.engine.resize(&self.host, &mut self.surface);
        }
    }

    /// Draw one frame. Returns whether the host should schedule the
    /// next one; a frame already queued when `detach` ran lands here
    /// and becomes a no-op.
    pub fn on_frame(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.engine.tick(&mut self.surface);
        true
    }

    pub fn detach(&mut self) {
        if self.state.halt() {
            log::debug!("[wave] detached after {} frames", self.engine.frames());
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn engine(&self) -> &WaveEngine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

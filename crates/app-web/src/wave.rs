use app_core::{DrawSurface, HostMetrics, StrokeStyle, WaveInstance, WaveParams};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas-2D implementation of the engine's drawing capability.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas cannot provide a 2D context; the feature
    /// is then permanently unavailable for this instance.
    pub fn from_canvas(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_pixel_scale(&mut self, dpr: f64) {
        // drawing ops use CSS pixels from here on
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.ctx
            .set_stroke_style_str(&format!("rgba(255,255,255,{:.3})", style.alpha));
        self.ctx.set_line_width(style.width);
        self.ctx.stroke();
    }
}

/// Window-backed metrics for the canvas host element.
pub struct BrowserHost {
    canvas: web::HtmlCanvasElement,
}

impl HostMetrics for BrowserHost {
    fn device_pixel_ratio(&self) -> f64 {
        web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
    }

    fn surface_box(&self) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        (rect.width(), rect.height())
    }
}

type Instance = WaveInstance<BrowserHost, CanvasSurface>;

struct ActiveWave {
    instance: RefCell<Instance>,
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    on_resize: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Opaque handle to a running hero wave. Cloning shares the instance.
#[derive(Clone)]
pub struct WaveHandle {
    shared: Rc<ActiveWave>,
    canvas_id: String,
}

thread_local! {
    // one loop per canvas id, ever
    static ACTIVE: RefCell<FnvHashMap<String, WaveHandle>> =
        RefCell::new(FnvHashMap::default());
}

/// Start the hero wave on the canvas with the given id. Returns `None`
/// when the canvas or its 2D context is missing (feature unavailable,
/// not an error). Re-attaching while a loop is already running hands
/// back the existing handle instead of starting a second loop.
pub fn attach(canvas_id: &str) -> Option<WaveHandle> {
    if let Some(existing) = ACTIVE.with(|m| m.borrow().get(canvas_id).cloned()) {
        if existing.is_running() {
            log::warn!("[wave] attach while running on #{canvas_id}; reusing active loop");
            return Some(existing);
        }
    }

    let document = crate::dom::window_document()?;
    let canvas = document
        .get_element_by_id(canvas_id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;

    let surface = CanvasSurface::from_canvas(canvas.clone());
    let host = BrowserHost { canvas };
    let instance = WaveInstance::attach(host, surface, WaveParams::default())?;

    let handle = WaveHandle {
        shared: Rc::new(ActiveWave {
            instance: RefCell::new(instance),
            raf_id: Cell::new(None),
            tick: RefCell::new(None),
            on_resize: RefCell::new(None),
        }),
        canvas_id: canvas_id.to_string(),
    };

    // track viewport changes for as long as the loop lives
    {
        let h = handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            h.shared.instance.borrow_mut().on_resize();
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        *handle.shared.on_resize.borrow_mut() = Some(closure);
    }

    // self-rescheduling frame loop
    {
        let h = handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            h.shared.raf_id.set(None);
            let keep_going = h.shared.instance.borrow_mut().on_frame();
            if keep_going {
                h.schedule_frame();
            }
        }) as Box<dyn FnMut()>);
        *handle.shared.tick.borrow_mut() = Some(closure);
    }
    handle.schedule_frame();

    ACTIVE.with(|m| {
        m.borrow_mut()
            .insert(canvas_id.to_string(), handle.clone());
    });
    log::info!("[wave] attached to #{canvas_id}");
    Some(handle)
}

/// Stop the wave attached to `canvas_id`, if any.
pub fn detach_by_id(canvas_id: &str) {
    if let Some(handle) = ACTIVE.with(|m| m.borrow().get(canvas_id).cloned()) {
        handle.detach();
    }
}

impl WaveHandle {
    fn schedule_frame(&self) {
        let Some(window) = web::window() else { return };
        if let Some(tick) = self.shared.tick.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                self.shared.raf_id.set(Some(id));
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.instance.borrow().is_running()
    }

    /// Stop the loop and release every host resource. Safe to call any
    /// number of times; after the first return no further frame or
    /// resize callback runs for this instance.
    pub fn detach(&self) {
        // halt first so a frame that already left the queue is a no-op
        self.shared.instance.borrow_mut().detach();

        if let Some(id) = self.shared.raf_id.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        if let Some(closure) = self.shared.on_resize.borrow_mut().take() {
            if let Some(window) = web::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
        }
        self.shared.tick.borrow_mut().take();

        ACTIVE.with(|m| {
            m.borrow_mut().remove(&self.canvas_id);
        });
        log::info!("[wave] detached from #{}", self.canvas_id);
    }
}

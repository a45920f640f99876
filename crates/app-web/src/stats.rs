use crate::dom;
use app_core::{TelemetryFrame, TelemetrySim, TELEMETRY_DEFAULT_LEVEL_BASE, TELEMETRY_INITIAL_FRAME, TELEMETRY_INITIAL_RATE_HZ, TELEMETRY_INTERVAL_SEC};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the "how it works" muscle map to the telemetry simulator.
/// Updates run on a 900 ms cadence and pause while the section is
/// off-screen.
pub fn init(document: &web::Document) {
    let Some(section) = document.query_selector("#how-it-works").ok().flatten() else {
        return;
    };

    let frame_el = section.query_selector(".bp-frame").ok().flatten();
    let hz_el = section.query_selector(".bp-hz").ok().flatten();
    let asym_el = section.query_selector(".bp-asym").ok().flatten();
    let impact_el = section.query_selector(".bp-impact").ok().flatten();
    let fills = dom::query_all_in(&section, ".bp-muscle-bar-fill");
    let vals = dom::query_all_in(&section, ".bp-muscle-value .bp-val");

    // do nothing, with no errors, when the upgraded markup is absent
    let (Some(frame_el), Some(hz_el)) = (frame_el, hz_el) else {
        return;
    };
    if fills.is_empty() || vals.is_empty() {
        return;
    }

    let initial_frame = parse_text(&frame_el).unwrap_or(TELEMETRY_INITIAL_FRAME);
    let initial_rate = parse_text(&hz_el).unwrap_or(TELEMETRY_INITIAL_RATE_HZ);
    let bases: Vec<f64> = fills
        .iter()
        .map(|f| {
            f.get_attribute("data-base")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(TELEMETRY_DEFAULT_LEVEL_BASE)
        })
        .collect();

    let seed = js_sys::Date::now() as u64;
    let sim = Rc::new(RefCell::new(TelemetrySim::new(
        bases,
        initial_frame,
        initial_rate,
        seed,
    )));

    {
        let sim = sim.clone();
        dom::observe_intersection(&section, 0.25, move |intersecting, _observer| {
            sim.borrow_mut().set_running(intersecting);
        });
    }

    let mut last = Instant::now();
    let mut frames: Vec<TelemetryFrame> = Vec::new();
    let tick = Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = now - last;
        last = now;

        frames.clear();
        sim.borrow_mut().tick(dt, &mut frames);
        if let Some(frame) = frames.last() {
            render_frame(frame, &frame_el, &hz_el, asym_el.as_ref(), impact_el.as_ref(), &fills, &vals);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            (TELEMETRY_INTERVAL_SEC * 1000.0) as i32,
        );
    }
    tick.forget();
    log::info!("[stats] muscle map live");
}

fn render_frame(
    frame: &TelemetryFrame,
    frame_el: &web::Element,
    hz_el: &web::Element,
    asym_el: Option<&web::Element>,
    impact_el: Option<&web::Element>,
    fills: &[web::Element],
    vals: &[web::Element],
) {
    frame_el.set_text_content(Some(&frame.frame.to_string()));
    hz_el.set_text_content(Some(&frame.rate_hz.to_string()));

    for (i, fill) in fills.iter().enumerate() {
        let Some(level) = frame.levels.get(i) else {
            continue;
        };
        if let Some(el) = fill.dyn_ref::<web::HtmlElement>() {
            let _ = el.style().set_property("width", &format!("{level}%"));
        }
        if let Some(val) = vals.get(i) {
            val.set_text_content(Some(&level.to_string()));
        }
    }

    if let Some(el) = asym_el {
        el.set_text_content(Some(&frame.asymmetry.to_string()));
    }
    if let Some(el) = impact_el {
        el.set_text_content(Some(&frame.impact.to_string()));
    }
}

fn parse_text<T: std::str::FromStr>(el: &web::Element) -> Option<T> {
    el.text_content().and_then(|s| s.trim().parse().ok())
}

use crate::dom;
use app_core::{
    float_stagger_sec, generate_stars, panel_tilt, PANEL_MAX_LIFT_PX, PANEL_MAX_TILT_DEG,
    STAR_COUNT,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build the overview star field and wire the floating/tilting panels.
pub fn init(document: &web::Document) {
    let Some(wrap) = document
        .query_selector("#overview.bp-constellation-wrap")
        .ok()
        .flatten()
    else {
        return;
    };
    let Some(layer) = wrap.query_selector(".bp-constellation").ok().flatten() else {
        return;
    };

    if layer.get_attribute("data-built").is_none() {
        let _ = layer.set_attribute("data-built", "true");
        build_star_field(document, &layer);
    }

    let panels = dom::query_all_in(&wrap, ".bp-float-panel");
    if panels.is_empty() {
        return;
    }

    // stagger float phase so neighbours never bob in sync
    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
    for (idx, panel) in panels.iter().enumerate() {
        if let Some(el) = panel.dyn_ref::<web::HtmlElement>() {
            let delay = float_stagger_sec(idx, &mut rng);
            let _ = el.style().set_property("animation-delay", &format!("{delay:.2}s"));
        }
    }

    // float on once the section scrolls into view
    {
        let panels = panels.clone();
        dom::observe_intersection(&wrap, 0.25, move |intersecting, observer| {
            if intersecting {
                for panel in &panels {
                    let _ = panel.class_list().add_1("bp-float-on");
                }
                observer.disconnect();
            }
        });
    }

    // tilt toward the cursor, clear on leave
    {
        let wrap_for_move = wrap.clone();
        let panels_for_move = panels.clone();
        dom::add_event_listener(&wrap, "mousemove", move |ev: web::Event| {
            let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else {
                return;
            };
            let rect = wrap_for_move.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let u = (ev.client_x() as f64 - rect.left()) / rect.width();
            let v = (ev.client_y() as f64 - rect.top()) / rect.height();
            let tilt = panel_tilt(
                Vec2::new(u as f32, v as f32),
                PANEL_MAX_TILT_DEG,
                PANEL_MAX_LIFT_PX,
            );
            let transform = format!(
                "perspective(900px) rotateX({:.2}deg) rotateY({:.2}deg) translate3d(0, {:.2}px, 0)",
                tilt.rotate_x_deg, tilt.rotate_y_deg, -tilt.lift_px
            );
            for panel in &panels_for_move {
                if let Some(el) = panel.dyn_ref::<web::HtmlElement>() {
                    let _ = el.style().set_property("transform", &transform);
                }
            }
        });

        let panels_for_leave = panels.clone();
        dom::add_event_listener(&wrap, "mouseleave", move |_ev: web::Event| {
            for panel in &panels_for_leave {
                if let Some(el) = panel.dyn_ref::<web::HtmlElement>() {
                    let _ = el.style().remove_property("transform");
                }
            }
        });
    }
}

fn build_star_field(document: &web::Document, layer: &web::Element) {
    let seed = js_sys::Date::now() as u64;
    for star in generate_stars(STAR_COUNT, seed) {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        span.set_class_name(if star.tinted { "bp-star is-blue" } else { "bp-star" });
        if let Some(el) = span.dyn_ref::<web::HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("left", &format!("{:.3}%", star.position.x));
            let _ = style.set_property("top", &format!("{:.3}%", star.position.y));
            let _ = style.set_property("--tw", &format!("{:.2}s", star.twinkle_period_sec));
            let _ = style.set_property("--td", &format!("{:.2}s", star.twinkle_delay_sec));
        }
        let _ = layer.append_child(&span);
    }
}

use app_core::{CurtainPhase, CurtainTimeline, IntroCurtain};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run the intro overlay if the page has one. One rAF loop advances the
/// phase machine; the loop stops rescheduling itself once the overlay
/// is removed.
pub fn init(document: &web::Document) {
    let Some(intro) = document.query_selector(".bp-intro").ok().flatten() else {
        return;
    };

    // keep the page from scrolling underneath the overlay
    set_scroll_lock(document, true);
    let _ = intro.class_list().add_1("bp-intro--on");
    log::info!("[curtain] intro running");

    let mut curtain = IntroCurtain::new(CurtainTimeline::default());
    let mut last = Instant::now();
    let document = document.clone();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = now - last;
        last = now;

        if let Some(phase) = curtain.advance(dt) {
            apply_phase(&document, &intro, phase);
        }
        if curtain.is_done() {
            // overlay is gone; let the loop end here
            return;
        }
        if let Some(window) = web::window() {
            let _ = window.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(window) = web::window() {
        let _ = window
            .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn apply_phase(document: &web::Document, intro: &web::Element, phase: CurtainPhase) {
    match phase {
        CurtainPhase::Hold => {}
        CurtainPhase::Opening => {
            let _ = intro.class_list().add_1("bp-intro--open");
        }
        CurtainPhase::Fading => {
            let _ = intro.class_list().add_1("bp-intro--hide");
        }
        CurtainPhase::Done => {
            intro.remove();
            set_scroll_lock(document, false);
            log::info!("[curtain] intro removed");
        }
    }
}

fn set_scroll_lock(document: &web::Document, locked: bool) {
    if let Some(root) = document.document_element() {
        toggle_lock_class(&root, locked);
    }
    if let Some(body) = document.body() {
        toggle_lock_class(&body, locked);
    }
}

fn toggle_lock_class(el: &web::Element, locked: bool) {
    let _ = if locked {
        el.class_list().add_1("bp-lock")
    } else {
        el.class_list().remove_1("bp-lock")
    };
}

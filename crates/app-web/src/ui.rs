use crate::dom;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const TOAST_DURATION_MS: i32 = 2600;

pub fn init_mobile_menu(document: &web::Document) {
    let toggle = document.query_selector(".bp-nav-toggle").ok().flatten();
    let mobile_nav = document.query_selector(".bp-nav-mobile").ok().flatten();
    let (Some(toggle), Some(mobile_nav)) = (toggle, mobile_nav) else {
        return;
    };

    let toggle_for_click = toggle.clone();
    dom::add_click_listener(&toggle, move || {
        let is_open = mobile_nav.class_list().toggle("open").unwrap_or(false);
        let _ = toggle_for_click.set_attribute("aria-expanded", if is_open { "true" } else { "false" });
    });
}

pub fn init_accordions(document: &web::Document) {
    for item in dom::query_all(document, ".bp-accordion-item") {
        let Some(header) = item.query_selector(".bp-accordion-header").ok().flatten() else {
            continue;
        };
        let item_for_click = item.clone();
        dom::add_click_listener(&header, move || {
            let _ = item_for_click.class_list().toggle("active");
        });
    }
}

pub fn init_tabs(document: &web::Document) {
    let tabs = dom::query_all(document, ".bp-tab");
    let panels = dom::query_all(document, ".bp-tab-panel");
    if tabs.is_empty() || panels.is_empty() {
        return;
    }

    for tab in tabs.iter() {
        let tab_for_click = tab.clone();
        let tabs_all = tabs.clone();
        let panels_all = panels.clone();
        let document = document.clone();
        dom::add_click_listener(tab, move || {
            let Some(target) = tab_for_click.get_attribute("data-tab") else {
                return;
            };

            for t in &tabs_all {
                let _ = t.class_list().remove_1("active");
            }
            for p in &panels_all {
                let _ = p.class_list().remove_1("active");
            }

            let _ = tab_for_click.class_list().add_1("active");

            // supports either #id or data-panel mapping
            let panel = document.get_element_by_id(&target).or_else(|| {
                document
                    .query_selector(&format!(".bp-tab-panel[data-panel=\"{target}\"]"))
                    .ok()
                    .flatten()
            });
            if let Some(panel) = panel {
                let _ = panel.class_list().add_1("active");
            }
        });
    }
}

thread_local! {
    // pending hide timer for the single page toast
    static TOAST_TIMER: RefCell<Option<(i32, Closure<dyn FnMut()>)>> = RefCell::new(None);
}

/// Show the page toast; retriggering resets the hide timer.
pub fn show_toast(message: &str) {
    show_toast_for(message, TOAST_DURATION_MS);
}

pub fn show_toast_for(message: &str, duration_ms: i32) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(toast) = document.query_selector(".bp-toast").ok().flatten() else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };

    toast.set_text_content(Some(message));
    let _ = toast.class_list().add_1("visible");

    if let Some((timer, _closure)) = TOAST_TIMER.with(|t| t.borrow_mut().take()) {
        window.clear_timeout_with_handle(timer);
    }

    let hide = Closure::wrap(Box::new(move || {
        let _ = toast.class_list().remove_1("visible");
    }) as Box<dyn FnMut()>);
    if let Ok(timer) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(hide.as_ref().unchecked_ref(), duration_ms)
    {
        TOAST_TIMER.with(|t| *t.borrow_mut() = Some((timer, hide)));
    }
}

pub fn init_forms(document: &web::Document) {
    for form in dom::query_all(document, ".bp-form") {
        let form_for_submit = form.clone();
        dom::add_event_listener(&form, "submit", move |ev: web::Event| {
            let email = form_for_submit
                .query_selector("#emailInput")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());
            let error = form_for_submit.query_selector(".bp-error").ok().flatten();
            let (Some(email), Some(error)) = (email, error) else {
                return;
            };

            if !email.value().contains('@') {
                ev.prevent_default();
                error.set_text_content(Some("Please enter a valid email."));
                let _ = email.class_list().add_1("bp-input-error");
                return;
            }

            error.set_text_content(Some(""));
            let _ = email.class_list().remove_1("bp-input-error");
            show_toast("Submitted!");
        });
    }
}

pub fn init_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("bp-footer-year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

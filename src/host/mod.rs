//! Browser host: binds [`PageCore`] to the live DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host resolves DOM roles once, turns DOM events into [`PageEvent`]s,
//! and applies the returned [`Action`]s. All decisions live in the core;
//! this module only measures and mutates.
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `Closure::forget`. One-shot animation-frame callbacks clear themselves
//! from a holder slot after running.

mod dom;
mod listeners;
mod storage;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, Event, HtmlElement, IntersectionObserver, ScrollBehavior, ScrollToOptions};

use crate::config::PageConfig;
use crate::consts;
use crate::nav::ScrollMode;
use crate::page::{Action, PageCore, PageEvent, Target, waits_for_dom};
use crate::reveal::RevealMode;
use crate::ripple::Ripple;
use crate::toast::{Toast, ToastId};

pub use dom::{Dom, Field};
pub use storage::LocalStorageStore;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Shared page state reachable from every listener.
pub struct Host {
    core: RefCell<PageCore>,
    dom: Dom,
    toasts: RefCell<HashMap<ToastId, Element>>,
    observer: RefCell<Option<IntersectionObserver>>,
}

pub type SharedHost = Rc<Host>;

/// Module entry point, run once when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger init failed: {e}")));
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("page: startup failed: {}", HostError::NoDocument);
        return;
    };
    if waits_for_dom(&document.ready_state()) {
        log::debug!("page: document still loading, deferring mount");
        if let Err(e) = listeners::once(&document, "DOMContentLoaded", |_| boot()) {
            log::warn!("page: cannot defer startup: {e}");
        }
    } else {
        boot();
    }
}

fn boot() {
    if let Err(e) = mount() {
        log::warn!("page: startup failed: {e}");
    }
}

/// Resolve the DOM, build the core, wire listeners, and run the initial pass.
///
/// # Errors
///
/// Returns an error when the document is unavailable or a listener cannot be
/// attached.
pub fn mount() -> Result<SharedHost, HostError> {
    let dom = Dom::resolve()?;
    let config = match dom.config_json() {
        Some(raw) => PageConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("page: {e}; using defaults");
            PageConfig::default()
        }),
        None => PageConfig::default(),
    };
    let caps = dom.capabilities();
    let store = Box::new(LocalStorageStore::new(&dom.window));
    let core = PageCore::new(config, dom.roles(), store, caps.as_ref());

    let host = Rc::new(Host {
        core: RefCell::new(core),
        dom,
        toasts: RefCell::new(HashMap::new()),
        observer: RefCell::new(None),
    });

    let observe = host.core.borrow().reveal_mode() == RevealMode::Observe && !host.dom.reveal.is_empty();
    if observe {
        let observer = listeners::reveal_observer(&host)?;
        *host.observer.borrow_mut() = Some(observer);
    }

    let actions = host.core.borrow_mut().start(&host.dom);
    apply(&host, actions, None);
    listeners::wire(&host)?;
    log::debug!("page: mounted");
    Ok(host)
}

/// Run `event` through the core and apply the result.
pub fn dispatch(host: &SharedHost, event: PageEvent, dom_event: Option<&Event>) {
    let actions = host.core.borrow_mut().handle(event, &host.dom);
    apply(host, actions, dom_event);
}

fn apply(host: &SharedHost, actions: Vec<Action>, dom_event: Option<&Event>) {
    for action in actions {
        if let Err(e) = apply_one(host, action, dom_event) {
            log::warn!("page: action failed: {e}");
        }
    }
}

fn apply_one(host: &SharedHost, action: Action, dom_event: Option<&Event>) -> Result<(), HostError> {
    let dom = &host.dom;
    match action {
        Action::SetClass { target, class, on } => {
            if let Some(el) = element(dom, target) {
                el.class_list().toggle_with_force(class, on)?;
            }
        }
        Action::SetAttribute { target, name, value } => {
            if let Some(el) = element(dom, target) {
                el.set_attribute(name, value)?;
            }
        }
        Action::SetText { target, text } => {
            if let Some(el) = element(dom, target) {
                el.set_text_content(Some(text));
            }
        }
        Action::SetStyle { target, property, value } => {
            if let Some(el) = element(dom, target).and_then(|e| e.dyn_ref::<HtmlElement>().cloned()) {
                el.style().set_property(property, &value)?;
            }
        }
        Action::ScrollTo { top, mode } => {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(match mode {
                ScrollMode::Instant => ScrollBehavior::Auto,
                ScrollMode::Smooth => ScrollBehavior::Smooth,
            });
            dom.window.scroll_to_with_scroll_to_options(&options);
        }
        Action::RequestFrame => request_frame(host),
        Action::Observe(index) => {
            if let (Some(observer), Some(el)) = (host.observer.borrow().as_ref(), dom.reveal.get(index)) {
                observer.observe(el);
            }
        }
        Action::Unobserve(index) => {
            if let (Some(observer), Some(el)) = (host.observer.borrow().as_ref(), dom.reveal.get(index)) {
                observer.unobserve(el);
            }
        }
        Action::PreventDefault => {
            if let Some(event) = dom_event {
                event.prevent_default();
            }
        }
        Action::StopPropagation => {
            if let Some(event) = dom_event {
                event.stop_propagation();
            }
        }
        Action::Focus(index) => {
            if let Some(field) = dom.fields.get(index) {
                field.element().focus()?;
            }
        }
        Action::ClearFields => dom.fields.iter().for_each(Field::clear),
        Action::ShowToast { id, toast } => show_toast(host, id, &toast)?,
        Action::ScheduleToastWake { at_ms } => schedule_toast_wake(host, at_ms),
        Action::HideToast(id) => hide_toast(host, id)?,
        Action::RemoveToast(id) => {
            if let Some(el) = host.toasts.borrow_mut().remove(&id) {
                el.remove();
            }
        }
        Action::Alert(message) => dom.window.alert_with_message(&message)?,
        Action::SpawnRipple(ripple) => spawn_ripple(dom, ripple)?,
    }
    Ok(())
}

fn element(dom: &Dom, target: Target) -> Option<Element> {
    match target {
        Target::Body => Some(Element::from(dom.body.clone())),
        Target::ThemeButton => dom.theme_button.clone(),
        Target::NavToggle => dom.nav_toggle.clone(),
        Target::NavList => dom.nav_list.clone(),
        Target::Overlay => dom.overlay.clone(),
        Target::ProgressBar => dom.progress_bar.clone(),
        Target::ScrollTop => dom.scroll_top.clone(),
        Target::NavLink(i) => dom.nav_links.get(i).cloned(),
        Target::Reveal(i) => dom.reveal.get(i).cloned(),
    }
}

/// One pending animation frame at a time; the core's frame gate decides
/// when to ask. Falls back to a synchronous update when scheduling fails.
fn request_frame(host: &SharedHost) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let host_for_cb = Rc::clone(host);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        dispatch(&host_for_cb, PageEvent::Frame, None);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if host.dom.window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        log::warn!("page: requestAnimationFrame failed, updating now");
        dispatch(host, PageEvent::Frame, None);
    }
}

// --- Toasts ---

fn show_toast(host: &SharedHost, id: ToastId, toast: &Toast) -> Result<(), HostError> {
    let Some(stack) = host.dom.toast_stack.as_ref() else {
        return Ok(());
    };
    let document = &host.dom.document;
    let el = document.create_element("div")?;
    el.set_class_name(&format!("toast {}", toast.kind.class_name()));

    let content = document.create_element("div")?;
    content.set_class_name("toast-content");
    content.set_inner_html(toast.kind.icon_svg());
    let text = document.create_element("span")?;
    text.set_text_content(Some(&toast.message));
    content.append_child(&text)?;
    el.append_child(&content)?;

    stack.append_child(&el)?;
    host.toasts.borrow_mut().insert(id, el);
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn schedule_toast_wake(host: &SharedHost, at_ms: f64) {
    let delay = (at_ms - js_sys::Date::now()).max(0.0).ceil() as u32;
    let host = Rc::clone(host);
    Timeout::new(delay, move || {
        dispatch(&host, PageEvent::ToastTimer { now_ms: at_ms }, None);
    })
    .forget();
}

fn hide_toast(host: &SharedHost, id: ToastId) -> Result<(), HostError> {
    let Some(el) = host.toasts.borrow().get(&id).cloned() else {
        return Ok(());
    };
    el.class_list().add_1(consts::TOAST_HIDDEN_CLASS)?;
    for event_type in ["animationend", "transitionend"] {
        let host = Rc::clone(host);
        listeners::once(&el, event_type, move |_| {
            dispatch(&host, PageEvent::ToastExitEnd { id }, None);
        })?;
    }
    Ok(())
}

// --- Ripple ---

fn spawn_ripple(dom: &Dom, ripple: Ripple) -> Result<(), HostError> {
    let Some(button) = dom.send_button.as_ref() else {
        return Ok(());
    };
    if let Some(existing) = button.query_selector(&format!(".{}", consts::RIPPLE_CLASS))? {
        existing.remove();
    }
    let span = dom.document.create_element("span")?;
    span.class_list().add_1(consts::RIPPLE_CLASS)?;
    if let Some(html) = span.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (property, value) in ripple.style() {
            style.set_property(property, &value)?;
        }
    }
    button.append_child(&span)?;
    let span_for_cb = span.clone();
    listeners::once(&span, "animationend", move |_| span_for_cb.remove())?;
    Ok(())
}

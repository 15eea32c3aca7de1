//! DOM listener wiring: each listener turns one DOM event into a [`PageEvent`].

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

use super::{HostError, SharedHost, dispatch};
use crate::page::PageEvent;
use crate::ripple::RipplePointer;

/// Attach a page-lifetime listener.
fn listen(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<(), HostError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a listener that the browser drops after its first call.
pub(super) fn once(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<(), HostError> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn passive(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<(), HostError> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Listener that forwards a fixed event.
fn forward(host: &SharedHost, target: &EventTarget, event_type: &str, event: PageEvent) -> Result<(), HostError> {
    let host = Rc::clone(host);
    listen(target, event_type, move |dom_event| dispatch(&host, event.clone(), Some(&dom_event)))
}

/// Wire every listener whose elements exist.
///
/// # Errors
///
/// Fails when the browser refuses to attach a listener.
pub(super) fn wire(host: &SharedHost) -> Result<(), HostError> {
    let dom = &host.dom;

    if let Some(button) = &dom.theme_button {
        forward(host, button, "click", PageEvent::ThemeToggle)?;
    }

    if let (Some(toggle), Some(_)) = (&dom.nav_toggle, &dom.nav_list) {
        forward(host, toggle, "click", PageEvent::NavToggleClick)?;
        if let Some(overlay) = &dom.overlay {
            forward(host, overlay, "click", PageEvent::OverlayClick)?;
        }
        let on_key = Rc::clone(host);
        listen(&dom.document, "keydown", move |event| {
            let key = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key).unwrap_or_default();
            dispatch(&on_key, PageEvent::KeyDown { key }, Some(&event));
        })?;
        let on_resize = Rc::clone(host);
        listen(&dom.window, "resize", move |event| {
            let width = on_resize.dom.viewport_width();
            dispatch(&on_resize, PageEvent::Resize { width }, Some(&event));
        })?;
    } else {
        log::debug!("drawer: toggle or nav list missing, skipping");
    }

    for (index, link) in dom.nav_links.iter().enumerate() {
        forward(host, link, "click", PageEvent::NavLinkClick { index })?;
    }

    if let Some(link) = &dom.contact_link {
        forward(host, link, "click", PageEvent::ContactLinkClick)?;
    }

    if let Some(button) = &dom.scroll_top {
        forward(host, button, "click", PageEvent::ScrollTopClick)?;
    }

    if let Some(button) = &dom.send_button {
        let on_submit = Rc::clone(host);
        let button_for_cb = button.clone();
        listen(button, "click", move |event| {
            let values = on_submit.dom.fields.iter().map(super::Field::value).collect();
            let pointer = ripple_pointer(&button_for_cb, &event);
            let now_ms = js_sys::Date::now();
            dispatch(&on_submit, PageEvent::SubmitClick { values, pointer, now_ms }, Some(&event));
        })?;

        for (index, field) in dom.fields.iter().enumerate() {
            let on_field_key = Rc::clone(host);
            listen(field.element(), "keydown", move |event| {
                let key = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key).unwrap_or_default();
                dispatch(&on_field_key, PageEvent::FieldKeyDown { index, key }, Some(&event));
            })?;
        }
    } else {
        log::debug!("form: no send button, skipping");
    }

    let on_scroll = Rc::clone(host);
    passive(&dom.window, "scroll", move |_| dispatch(&on_scroll, PageEvent::Scroll, None))?;

    log::debug!(
        "page: wired {} nav links, {} fields, {} sections",
        dom.nav_links.len(),
        dom.fields.len(),
        dom.sections.len()
    );
    Ok(())
}

fn ripple_pointer(button: &Element, event: &Event) -> RipplePointer {
    let rect = button.get_bounding_client_rect();
    let offset = event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| (f64::from(mouse.offset_x()), f64::from(mouse.offset_y())));
    RipplePointer {
        client_width: f64::from(button.client_width()),
        client_height: f64::from(button.client_height()),
        rect_width: rect.width(),
        rect_height: rect.height(),
        offset,
    }
}

/// Build the reveal observer. Entries map back to reveal elements by identity.
///
/// # Errors
///
/// Fails when the browser rejects the observer options.
pub(super) fn reveal_observer(host: &SharedHost) -> Result<IntersectionObserver, HostError> {
    let (threshold, root_margin) = {
        let core = host.core.borrow();
        (core.config.reveal_threshold, core.config.reveal_root_margin.clone())
    };
    let on_entries = Rc::clone(host);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: JsValue| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = on_entries.dom.reveal.iter().position(|el| *el == target) else {
                continue;
            };
            let event = PageEvent::Intersection { index, is_intersecting: entry.is_intersecting() };
            dispatch(&on_entries, event, None);
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(&root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

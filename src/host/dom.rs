//! DOM role lookup and layout measurement.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use super::HostError;
use crate::page::PageRoles;
use crate::reveal::{Capabilities, Degraded, Full};
use crate::scroll::{Layout, Viewport};

/// A form field that holds a text value.
pub enum Field {
    Input(web_sys::HtmlInputElement),
    TextArea(web_sys::HtmlTextAreaElement),
}

impl Field {
    fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<web_sys::HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(element) => element,
        };
        match element.dyn_into::<web_sys::HtmlTextAreaElement>() {
            Ok(area) => Some(Self::TextArea(area)),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    pub fn clear(&self) {
        match self {
            Self::Input(input) => input.set_value(""),
            Self::TextArea(area) => area.set_value(""),
        }
    }

    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(input) => input,
            Self::TextArea(area) => area,
        }
    }
}

/// Elements resolved once at startup.
pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub theme_button: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_list: Option<Element>,
    pub nav_links: Vec<Element>,
    pub overlay: Option<Element>,
    pub header: Option<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub reveal: Vec<Element>,
    pub progress_bar: Option<Element>,
    pub scroll_top: Option<Element>,
    pub send_button: Option<Element>,
    pub fields: Vec<Field>,
    pub toast_stack: Option<Element>,
    pub contact_link: Option<Element>,
}

impl Dom {
    /// Resolve every role. Missing roles are `None` or empty.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window, document, or body.
    pub fn resolve() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        let body = document.body().ok_or(HostError::NoBody)?;

        let nav_list = document.get_element_by_id("primary-navigation");
        let nav_links = match &nav_list {
            Some(list) => elements(&list.query_selector_all("a")?),
            None => Vec::new(),
        };
        let fields = elements(&document.query_selector_all(".form-container .form-input[data-validate]")?)
            .into_iter()
            .filter_map(Field::from_element)
            .collect();

        Ok(Self {
            theme_button: document.get_element_by_id("theme-switch-button"),
            nav_toggle: document.get_element_by_id("nav-toggle"),
            nav_list,
            nav_links,
            overlay: document.get_element_by_id("mobile-menu-overlay"),
            header: html(document.query_selector(".navbar-container")?),
            sections: elements(&document.query_selector_all("[data-section]")?)
                .into_iter()
                .filter_map(|e| e.dyn_ref::<HtmlElement>().cloned())
                .collect(),
            reveal: elements(&document.query_selector_all("[data-reveal]")?),
            progress_bar: document.get_element_by_id("scroll-progress"),
            scroll_top: document.query_selector(".scroll-top")?,
            send_button: document.query_selector(".send-button")?,
            fields,
            toast_stack: document.get_element_by_id("toast-stack"),
            contact_link: document.query_selector(".contact-link")?,
            window,
            document,
            body,
        })
    }

    /// Presence summary for the core.
    #[must_use]
    pub fn roles(&self) -> PageRoles {
        PageRoles {
            theme_button: self.theme_button.is_some(),
            nav_toggle: self.nav_toggle.is_some(),
            nav_list: self.nav_list.is_some(),
            overlay: self.overlay.is_some(),
            progress_bar: self.progress_bar.is_some(),
            scroll_top: self.scroll_top.is_some(),
            send_button: self.send_button.is_some(),
            toast_stack: self.toast_stack.is_some(),
            contact_link: self.contact_link.is_some(),
            nav_links: self.nav_links.iter().map(|link| link.get_attribute("href")).collect(),
            sections: self.sections.iter().map(section_key).collect(),
            reveal_count: self.reveal.len(),
            field_keys: self
                .fields
                .iter()
                .map(|f| f.element().get_attribute("data-validate").unwrap_or_default())
                .collect(),
        }
    }

    /// Detect intersection observation and the reduced-motion preference.
    #[must_use]
    pub fn capabilities(&self) -> Box<dyn Capabilities> {
        let reduced_motion = match self.window.match_media("(prefers-reduced-motion: reduce)") {
            Ok(Some(query)) => query.matches(),
            Ok(None) | Err(_) => false,
        };
        let observer = js_sys::Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if observer {
            Box::new(Full { reduced_motion })
        } else {
            log::debug!("reveal: IntersectionObserver unavailable");
            Box::new(Degraded { reduced_motion })
        }
    }

    /// Raw JSON from `<body data-page-config>`, if present.
    #[must_use]
    pub fn config_json(&self) -> Option<String> {
        self.body.get_attribute("data-page-config")
    }

    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        js_f64(self.window.inner_width())
    }
}

impl Layout for Dom {
    fn viewport(&self) -> Viewport {
        let document_height = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        Viewport {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            width: js_f64(self.window.inner_width()),
            height: js_f64(self.window.inner_height()),
            document_height,
        }
    }

    fn header_height(&self) -> Option<f64> {
        self.header.as_ref().map(|h| f64::from(h.offset_height()))
    }

    fn section_tops(&self) -> Vec<f64> {
        self.sections.iter().map(|s| f64::from(s.offset_top())).collect()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = self.document.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }
}

/// `id`, falling back to `data-section`.
fn section_key(section: &HtmlElement) -> String {
    let id = section.id();
    if !id.is_empty() {
        return id;
    }
    section.get_attribute("data-section").unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn html(element: Option<Element>) -> Option<HtmlElement> {
    element?.dyn_ref::<HtmlElement>().cloned()
}

fn js_f64(value: Result<JsValue, JsValue>) -> f64 {
    match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

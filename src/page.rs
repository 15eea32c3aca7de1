use crate::config::PageConfig;
use crate::consts;
use crate::form::{self, ValidationResult};
use crate::nav::{self, Drawer, DrawerEvent, DrawerFacets, NavIntent, ScrollMode};
use crate::reveal::{Capabilities, RevealController, RevealMode};
use crate::ripple::{Ripple, RipplePointer};
use crate::scroll::{self, FrameGate, Layout, Telemetry};
use crate::theme::{PreferenceStore, Theme, ThemeController};
use crate::toast::{Toast, ToastEffect, ToastId, ToastStack};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// DOM element an [`Action`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Body,
    ThemeButton,
    NavToggle,
    NavList,
    Overlay,
    ProgressBar,
    ScrollTop,
    /// Nav link by position in the nav list.
    NavLink(usize),
    /// `[data-reveal]` element by document position.
    Reveal(usize),
}

/// Actions returned from event handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetClass { target: Target, class: &'static str, on: bool },
    SetAttribute { target: Target, name: &'static str, value: &'static str },
    SetText { target: Target, text: &'static str },
    SetStyle { target: Target, property: &'static str, value: String },
    ScrollTo { top: f64, mode: ScrollMode },
    /// Schedule one animation frame that delivers [`PageEvent::Frame`].
    RequestFrame,
    Observe(usize),
    Unobserve(usize),
    PreventDefault,
    StopPropagation,
    /// Focus the form field at this position.
    Focus(usize),
    ClearFields,
    ShowToast { id: ToastId, toast: Toast },
    /// Deliver [`PageEvent::ToastTimer`] with `now_ms: at_ms` once that time arrives.
    ScheduleToastWake { at_ms: f64 },
    HideToast(ToastId),
    RemoveToast(ToastId),
    /// Blocking alert, used when the page has no toast container.
    Alert(String),
    SpawnRipple(Ripple),
}

/// Input events, one per DOM listener.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ThemeToggle,
    NavToggleClick,
    OverlayClick,
    /// Document-level key press.
    KeyDown { key: String },
    Resize { width: f64 },
    NavLinkClick { index: usize },
    ContactLinkClick,
    ScrollTopClick,
    Scroll,
    /// The animation frame requested by [`Action::RequestFrame`] fired.
    Frame,
    Intersection { index: usize, is_intersecting: bool },
    /// Send button click with the current field values in document order.
    SubmitClick { values: Vec<String>, pointer: RipplePointer, now_ms: f64 },
    FieldKeyDown { index: usize, key: String },
    ToastTimer { now_ms: f64 },
    ToastExitEnd { id: ToastId },
}

/// Which DOM roles exist on this page. Features whose elements are missing
/// stay inert.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default)]
pub struct PageRoles {
    pub theme_button: bool,
    pub nav_toggle: bool,
    pub nav_list: bool,
    pub overlay: bool,
    pub progress_bar: bool,
    pub scroll_top: bool,
    pub send_button: bool,
    pub toast_stack: bool,
    pub contact_link: bool,
    /// `href` of each nav link, in order.
    pub nav_links: Vec<Option<String>>,
    /// Key (`id`, else `data-section`) of each tracked section, in order.
    pub sections: Vec<String>,
    pub reveal_count: usize,
    /// `data-validate` key of each form field, in order.
    pub field_keys: Vec<String>,
}

impl PageRoles {
    fn drawer_enabled(&self) -> bool {
        self.nav_toggle && self.nav_list
    }
}

/// Whether startup must wait for `DOMContentLoaded`, given
/// `document.readyState`. Roles resolved while the parser is still running
/// would miss elements below the script.
#[must_use]
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Page state and event dispatch, independent of the browser.
pub struct PageCore {
    pub config: PageConfig,
    pub roles: PageRoles,
    pub theme: ThemeController,
    pub drawer: Drawer,
    pub reveal: RevealController,
    pub toasts: ToastStack,
    pub frame: FrameGate,
    reduced_motion: bool,
    reveal_mode: RevealMode,
}

impl PageCore {
    #[must_use]
    pub fn new(
        config: PageConfig,
        roles: PageRoles,
        store: Box<dyn PreferenceStore>,
        caps: &dyn Capabilities,
    ) -> Self {
        let theme = ThemeController::new(store, &config.storage_key);
        let drawer = Drawer::new(config.mobile_breakpoint_px);
        let reveal = RevealController::new(roles.reveal_count);
        let toasts = ToastStack::new(config.toast_visible_ms, config.toast_grace_ms);
        Self {
            config,
            roles,
            theme,
            drawer,
            reveal,
            toasts,
            frame: FrameGate::default(),
            reduced_motion: caps.prefers_reduced_motion(),
            reveal_mode: RevealMode::select(caps),
        }
    }

    #[must_use]
    pub fn reveal_mode(&self) -> RevealMode {
        self.reveal_mode
    }

    #[must_use]
    pub fn scroll_mode(&self) -> ScrollMode {
        ScrollMode::for_motion(self.reduced_motion)
    }

    /// Initial pass: theme, reveal setup, and one telemetry update.
    pub fn start(&mut self, layout: &dyn Layout) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.roles.theme_button {
            let theme = self.theme.load_preference();
            push_theme(&mut actions, theme);
        } else {
            log::debug!("theme: no toggle button, skipping");
        }
        self.start_reveal(&mut actions);
        self.push_telemetry(&mut actions, layout);
        actions
    }

    fn start_reveal(&mut self, actions: &mut Vec<Action>) {
        if self.reveal.is_empty() {
            return;
        }
        for i in 0..self.reveal.len() {
            actions.push(Action::SetClass { target: Target::Reveal(i), class: consts::REVEAL_CLASS, on: true });
        }
        self.reveal.start(self.reveal_mode);
        log::debug!("reveal: {} elements, mode {:?}", self.reveal.len(), self.reveal_mode);
        for i in 0..self.reveal.len() {
            actions.push(match self.reveal_mode {
                RevealMode::Immediate => reveal_visible(i),
                RevealMode::Observe => Action::Observe(i),
            });
        }
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: PageEvent, layout: &dyn Layout) -> Vec<Action> {
        let mut actions = Vec::new();
        match event {
            PageEvent::ThemeToggle => {
                if self.roles.theme_button {
                    let theme = self.theme.toggle();
                    push_theme(&mut actions, theme);
                }
            }
            PageEvent::NavToggleClick => {
                actions.push(Action::StopPropagation);
                self.drive_drawer(&mut actions, DrawerEvent::ToggleButton);
            }
            PageEvent::OverlayClick => self.drive_drawer(&mut actions, DrawerEvent::OverlayClick),
            PageEvent::KeyDown { key } => {
                if key == consts::ESCAPE_KEY {
                    self.drive_drawer(&mut actions, DrawerEvent::EscapeKey);
                }
            }
            PageEvent::Resize { width } => self.drive_drawer(&mut actions, DrawerEvent::Resize { width }),
            PageEvent::NavLinkClick { index } => self.nav_link_click(&mut actions, index, layout),
            PageEvent::ContactLinkClick => {
                if self.roles.contact_link {
                    actions.push(Action::PreventDefault);
                    self.push_scroll_to(&mut actions, consts::CONTACT_TARGET, layout);
                }
            }
            PageEvent::ScrollTopClick => {
                if self.roles.scroll_top {
                    actions.push(Action::ScrollTo { top: 0.0, mode: self.scroll_mode() });
                }
            }
            PageEvent::Scroll => {
                if self.frame.request() {
                    actions.push(Action::RequestFrame);
                }
            }
            PageEvent::Frame => {
                self.push_telemetry(&mut actions, layout);
                self.frame.release();
            }
            PageEvent::Intersection { index, is_intersecting } => {
                if self.reveal.on_intersection(index, is_intersecting) {
                    actions.push(reveal_visible(index));
                    actions.push(Action::Unobserve(index));
                }
            }
            PageEvent::SubmitClick { values, pointer, now_ms } => {
                if self.roles.send_button {
                    actions.push(Action::PreventDefault);
                    actions.push(Action::SpawnRipple(Ripple::place(&pointer)));
                    self.submit(&mut actions, &values, now_ms);
                }
            }
            PageEvent::FieldKeyDown { index, key } => {
                if let Some(next) = form::next_focus(index, self.roles.field_keys.len(), &key) {
                    actions.push(Action::PreventDefault);
                    actions.push(Action::Focus(next));
                }
            }
            PageEvent::ToastTimer { now_ms } => {
                for effect in self.toasts.advance(now_ms) {
                    actions.push(match effect {
                        ToastEffect::Hide(id) => Action::HideToast(id),
                        ToastEffect::Remove(id) => Action::RemoveToast(id),
                    });
                }
            }
            PageEvent::ToastExitEnd { id } => {
                if self.toasts.on_exit_end(id) {
                    actions.push(Action::RemoveToast(id));
                }
            }
        }
        actions
    }

    // --- Navigation ---

    fn nav_link_click(&mut self, actions: &mut Vec<Action>, index: usize, layout: &dyn Layout) {
        let Some(href) = self.roles.nav_links.get(index) else {
            return;
        };
        let intent = NavIntent::from_href(href.as_deref());
        if intent.prevents_default() {
            actions.push(Action::PreventDefault);
        }
        match intent {
            NavIntent::Top => actions.push(Action::ScrollTo { top: 0.0, mode: self.scroll_mode() }),
            NavIntent::Section(id) => self.push_scroll_to(actions, &id, layout),
            NavIntent::External => {}
        }
        self.drive_drawer(actions, DrawerEvent::NavLinkClick);
    }

    /// Scroll so the element with `id` sits just below the header. No-op
    /// when the element does not exist.
    fn push_scroll_to(&self, actions: &mut Vec<Action>, id: &str, layout: &dyn Layout) {
        if let Some(top) = self.scroll_offset_for(id, layout) {
            actions.push(Action::ScrollTo { top, mode: self.scroll_mode() });
        }
    }

    /// Document offset that [`Action::ScrollTo`] would target for `id`.
    #[must_use]
    pub fn scroll_offset_for(&self, id: &str, layout: &dyn Layout) -> Option<f64> {
        let element_top = layout.element_top(id)?;
        let viewport = layout.viewport();
        let header = self.header_height(layout);
        let padding = nav::target_padding(
            self.config.is_mobile(viewport.width),
            self.config.desktop_padding_px,
            self.config.mobile_padding_px,
        );
        Some(nav::scroll_target(element_top, viewport.scroll_y, header, padding))
    }

    fn header_height(&self, layout: &dyn Layout) -> f64 {
        scroll::effective_header_height(layout.header_height(), self.config.header_fallback_px)
    }

    fn drive_drawer(&mut self, actions: &mut Vec<Action>, event: DrawerEvent) {
        if !self.roles.drawer_enabled() {
            return;
        }
        if let Some(facets) = self.drawer.handle(event) {
            self.push_drawer(actions, facets);
        }
    }

    fn push_drawer(&self, actions: &mut Vec<Action>, facets: DrawerFacets) {
        actions.push(Action::SetClass { target: Target::NavList, class: consts::DRAWER_OPEN_CLASS, on: facets.open_class });
        actions.push(Action::SetAttribute {
            target: Target::NavToggle,
            name: "aria-expanded",
            value: bool_attr(facets.aria_expanded),
        });
        if self.roles.overlay {
            actions.push(Action::SetClass {
                target: Target::Overlay,
                class: consts::OVERLAY_ACTIVE_CLASS,
                on: facets.overlay_active,
            });
        }
        actions.push(Action::SetStyle {
            target: Target::Body,
            property: "overflow",
            value: if facets.body_scroll_locked { "hidden".to_owned() } else { String::new() },
        });
    }

    // --- Telemetry ---

    /// Derive this frame's scroll signals.
    #[must_use]
    pub fn telemetry(&self, layout: &dyn Layout) -> Telemetry {
        let viewport = layout.viewport();
        let mut active_links = vec![false; self.roles.nav_links.len()];
        if !self.roles.sections.is_empty() && !active_links.is_empty() {
            let probe = viewport.scroll_y + self.header_height(layout) + self.config.section_lookahead_px;
            let active_key = scroll::active_section(&layout.section_tops(), probe)
                .and_then(|i| self.roles.sections.get(i))
                .map_or(self.roles.sections[0].as_str(), String::as_str);
            for (flag, href) in active_links.iter_mut().zip(&self.roles.nav_links) {
                *flag = href.as_deref().map(|h| h.replacen('#', "", 1)).as_deref() == Some(active_key);
            }
        }
        Telemetry {
            progress: scroll::progress_ratio(&viewport),
            active_links,
            scroll_top_visible: scroll::scroll_top_visible(viewport.scroll_y, self.config.scroll_top_threshold_px),
        }
    }

    fn push_telemetry(&self, actions: &mut Vec<Action>, layout: &dyn Layout) {
        let telemetry = self.telemetry(layout);
        if self.roles.progress_bar {
            actions.push(Action::SetStyle {
                target: Target::ProgressBar,
                property: "transform",
                value: scroll::progress_transform(telemetry.progress),
            });
        }
        if !self.roles.sections.is_empty() {
            for (i, active) in telemetry.active_links.iter().enumerate() {
                actions.push(Action::SetClass { target: Target::NavLink(i), class: consts::ACTIVE_LINK_CLASS, on: *active });
            }
        }
        if self.roles.scroll_top {
            actions.push(Action::SetClass {
                target: Target::ScrollTop,
                class: consts::VISIBLE_CLASS,
                on: telemetry.scroll_top_visible,
            });
        }
    }

    // --- Contact form ---

    /// Validate field values in document order against the declared keys.
    #[must_use]
    pub fn validate(&self, values: &[String]) -> ValidationResult {
        let fields = self
            .roles
            .field_keys
            .iter()
            .cloned()
            .zip(values.iter().cloned())
            .collect::<Vec<_>>();
        form::validate(&fields, self.config.min_message_chars)
    }

    fn submit(&mut self, actions: &mut Vec<Action>, values: &[String], now_ms: f64) {
        let result = self.validate(values);
        if !result.is_valid {
            for error in &result.errors {
                self.push_toast(actions, Toast::error(error.to_string()), now_ms);
            }
            return;
        }
        let greeting = self.config.greeting(result.value(&self.config.greeting_field));
        self.push_toast(actions, Toast::success(greeting), now_ms);
        actions.push(Action::ClearFields);
    }

    /// Show `toast`, or fall back to an alert when the page has no toast stack.
    pub fn push_toast(&mut self, actions: &mut Vec<Action>, toast: Toast, now_ms: f64) {
        if !self.roles.toast_stack {
            actions.push(Action::Alert(toast.message));
            return;
        }
        let id = self.toasts.push(now_ms);
        actions.push(Action::ShowToast { id, toast });
        for delay in self.toasts.wake_delays() {
            actions.push(Action::ScheduleToastWake { at_ms: now_ms + delay });
        }
    }
}

fn push_theme(actions: &mut Vec<Action>, theme: Theme) {
    actions.push(Action::SetClass { target: Target::Body, class: consts::LIGHT_THEME_CLASS, on: theme.is_light() });
    actions.push(Action::SetText { target: Target::ThemeButton, text: theme.button_label() });
    actions.push(Action::SetAttribute { target: Target::ThemeButton, name: "aria-pressed", value: theme.aria_pressed() });
    actions.push(Action::SetAttribute { target: Target::ThemeButton, name: "aria-label", value: theme.aria_label() });
}

fn reveal_visible(index: usize) -> Action {
    Action::SetClass { target: Target::Reveal(index), class: consts::VISIBLE_CLASS, on: true }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

//! Client-side interactivity for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser once the
//! page is ready. It owns theme switching, smooth in-page navigation, scroll
//! telemetry (progress bar, active link, scroll-to-top), reveal-on-scroll, the
//! mobile navigation drawer, and the contact form with its toasts.
//!
//! The logic is a browser-free [`page::PageCore`] that turns
//! [`page::PageEvent`]s into [`page::Action`]s. The `browser` feature adds the
//! [`host`] module, which binds the core to the real DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Event dispatch, DOM roles, and [`page::Action`]s |
//! | [`theme`] | Theme preference, storage trait, toggle |
//! | [`scroll`] | Progress ratio, active section, frame gate, layout trait |
//! | [`nav`] | Scroll targets, link intents, drawer state machine |
//! | [`reveal`] | Capability detection and one-shot reveal |
//! | [`form`] | Contact form validation and focus advance |
//! | [`toast`] | Toast kinds and deadline-driven removal |
//! | [`ripple`] | Button ripple geometry |
//! | [`config`] | Tunables with JSON override |
//! | [`consts`] | Defaults, class names, keys |
//! | `host` | Browser bindings (`browser` feature) |

pub mod config;
pub mod consts;
pub mod form;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod theme;
pub mod toast;

#[cfg(feature = "browser")]
pub mod host;

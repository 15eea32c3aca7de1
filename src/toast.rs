//! Toast notifications with two removal paths.
//!
//! DESIGN
//! ======
//! Each toast carries its creation time. After the visible period it enters
//! `Hiding` and is removed either when its exit transition ends or, failing
//! that, when the grace period elapses. Time is supplied by the caller, so
//! the host drives [`ToastStack::advance`] from timers and tests drive it
//! from a virtual clock.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

const SUCCESS_ICON: &str = concat!(
    r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
    r#"<path d="M5 13L9 17L19 7" stroke="currentColor" stroke-width="2.2" stroke-linecap="round" stroke-linejoin="round"/>"#,
    "</svg>",
);

const ERROR_ICON: &str = concat!(
    r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
    r#"<path d="M12 8V12" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
    r#"<circle cx="12" cy="16" r="0.75" fill="currentColor"/>"#,
    r#"<path d="M3 12C3 7.02944 7.02944 3 12 3C16.9706 3 21 7.02944 21 12C21 16.9706 16.9706 21 12 21C7.02944 21 3 16.9706 3 12Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
    "</svg>",
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Modifier class next to `toast`.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Inline SVG markup for the icon.
    #[must_use]
    pub fn icon_svg(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_ICON,
            Self::Error => ERROR_ICON,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }
}

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Hiding,
}

/// Lifecycle step the host must apply to a toast element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastEffect {
    /// Add `is-hidden` and start listening for the exit transition.
    Hide(ToastId),
    /// Detach the element.
    Remove(ToastId),
}

#[derive(Clone, Debug)]
struct Entry {
    id: ToastId,
    created_ms: f64,
    phase: ToastPhase,
}

/// Live toasts in insertion order.
#[derive(Clone, Debug)]
pub struct ToastStack {
    entries: Vec<Entry>,
    next_id: ToastId,
    visible_ms: f64,
    grace_ms: f64,
}

impl ToastStack {
    #[must_use]
    pub fn new(visible_ms: f64, grace_ms: f64) -> Self {
        Self { entries: Vec::new(), next_id: 1, visible_ms, grace_ms }
    }

    /// Track a new toast created at `now_ms`.
    pub fn push(&mut self, now_ms: f64) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry { id, created_ms: now_ms, phase: ToastPhase::Visible });
        id
    }

    /// Delays after creation at which [`ToastStack::advance`] must run.
    #[must_use]
    pub fn wake_delays(&self) -> [f64; 2] {
        [self.visible_ms, self.visible_ms + self.grace_ms]
    }

    /// Apply every deadline that has passed by `now_ms`.
    pub fn advance(&mut self, now_ms: f64) -> Vec<ToastEffect> {
        let mut effects = Vec::new();
        let (visible_ms, grace_ms) = (self.visible_ms, self.grace_ms);
        self.entries.retain_mut(|entry| {
            let elapsed = now_ms - entry.created_ms;
            if entry.phase == ToastPhase::Visible && elapsed >= visible_ms {
                entry.phase = ToastPhase::Hiding;
                effects.push(ToastEffect::Hide(entry.id));
            }
            if elapsed >= visible_ms + grace_ms {
                effects.push(ToastEffect::Remove(entry.id));
                return false;
            }
            true
        });
        effects
    }

    /// The exit transition of `id` finished. Returns `true` when the toast
    /// was hiding and is now removed; transitions before hiding are ignored.
    pub fn on_exit_end(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id && e.phase == ToastPhase::Hiding) else {
            return false;
        };
        self.entries.remove(pos);
        true
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.phase)
    }

    /// Live toast ids, oldest first.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

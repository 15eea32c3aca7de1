//! Pointer ripple on button activation.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// Button measurements and pointer position for one activation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RipplePointer {
    /// `clientWidth` / `clientHeight` of the button.
    pub client_width: f64,
    pub client_height: f64,
    /// Bounding box size, used to center the ripple without a pointer.
    pub rect_width: f64,
    pub rect_height: f64,
    /// Pointer `offsetX` / `offsetY` relative to the button, if known.
    pub offset: Option<(f64, f64)>,
}

/// A ripple circle, positioned relative to the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Size the ripple to the button's larger dimension and center it on the pointer.
    #[must_use]
    pub fn place(pointer: &RipplePointer) -> Self {
        let diameter = pointer.client_width.max(pointer.client_height);
        let radius = diameter / 2.0;
        let (x, y) = pointer
            .offset
            .unwrap_or((pointer.rect_width / 2.0, pointer.rect_height / 2.0));
        Self { diameter, left: x - radius, top: y - radius }
    }

    /// Inline style declarations as `(property, value)` pairs.
    #[must_use]
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("width", px(self.diameter)),
            ("height", px(self.diameter)),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

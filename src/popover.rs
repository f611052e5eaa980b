//! Hover popover anchored to a trigger element.
//!
//! Placement uses a midpoint heuristic: a trigger in the lower half of the
//! viewport gets its panel above, otherwise below. Geometry is read once,
//! synchronously, on the closed → open transition.

use serde::{Deserialize, Serialize};

use crate::logging::{log, obj, v_num, v_str, Domain, Level};

/// Distance between trigger edge and panel, in CSS pixels.
pub const GAP: f64 = 14.0;
/// Keeps the panel above every other layer.
pub const Z_INDEX: i32 = 9999;

/// Trigger bounds in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self { height, scroll_x: 0.0, scroll_y: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Above,
    Below,
}

/// Absolute document position of a visible panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub placement: Placement,
    pub left: f64,
    pub top: f64,
    /// Vertical translate applied to the panel, as a percentage of its own height.
    pub translate_y_pct: f64,
    pub z_index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopoverStyle {
    pub opacity: f64,
    pub anchor: Option<Anchor>,
}

impl PopoverStyle {
    pub const HIDDEN: PopoverStyle = PopoverStyle { opacity: 0.0, anchor: None };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.anchor.is_some()
    }
}

/// Where a panel goes for a trigger at `trigger` inside `viewport`.
pub fn place(trigger: Rect, viewport: Viewport) -> Anchor {
    let left = trigger.left + viewport.scroll_x;
    if trigger.top > viewport.height / 2.0 {
        Anchor {
            placement: Placement::Above,
            left,
            top: trigger.top + viewport.scroll_y - GAP,
            translate_y_pct: -100.0,
            z_index: Z_INDEX,
        }
    } else {
        Anchor {
            placement: Placement::Below,
            left,
            top: trigger.bottom + viewport.scroll_y + GAP,
            translate_y_pct: 0.0,
            z_index: Z_INDEX,
        }
    }
}

/// Layout reads needed on open. `trigger_rect` is `None` while the trigger
/// is not mounted.
pub trait Geometry {
    fn trigger_rect(&self) -> Option<Rect>;
    fn viewport(&self) -> Viewport;
}

/// Fixed geometry, for callers that already hold the measurements.
#[derive(Debug, Clone, Copy)]
pub struct StaticGeometry {
    pub trigger: Option<Rect>,
    pub viewport: Viewport,
}

impl Geometry for StaticGeometry {
    fn trigger_rect(&self) -> Option<Rect> {
        self.trigger
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopoverState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Popover {
    state: PopoverState,
    style: PopoverStyle,
}

impl Default for Popover {
    fn default() -> Self {
        Self::new()
    }
}

impl Popover {
    pub fn new() -> Self {
        Self { state: PopoverState::Closed, style: PopoverStyle::HIDDEN }
    }

    pub fn state(&self) -> PopoverState {
        self.state
    }

    pub fn style(&self) -> PopoverStyle {
        self.style
    }

    pub fn is_open(&self) -> bool {
        self.state == PopoverState::Open
    }

    /// Opens and measures. A second enter while already open does not
    /// re-measure; there is no debounce between rapid enter/leave pairs.
    pub fn pointer_enter(&mut self, geometry: &impl Geometry) {
        if self.state == PopoverState::Open {
            return;
        }
        self.state = PopoverState::Open;

        let Some(rect) = geometry.trigger_rect() else {
            log(
                Level::Debug,
                Domain::Popover,
                "unmeasured",
                obj(&[("msg", v_str("trigger not mounted"))]),
            );
            return;
        };
        let anchor = place(rect, geometry.viewport());
        let side = if anchor.placement == Placement::Above { "above" } else { "below" };
        log(
            Level::Trace,
            Domain::Popover,
            "open",
            obj(&[
                ("placement", v_str(side)),
                ("top", v_num(anchor.top)),
                ("left", v_num(anchor.left)),
            ]),
        );
        self.style = PopoverStyle { opacity: 1.0, anchor: Some(anchor) };
    }

    /// Closes and hides immediately, independent of any exit animation.
    pub fn pointer_leave(&mut self) {
        self.state = PopoverState::Closed;
        self.style = PopoverStyle::HIDDEN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry_at(top: f64, height: f64) -> StaticGeometry {
        StaticGeometry {
            trigger: Some(Rect::new(top, 40.0, 120.0, 24.0)),
            viewport: Viewport::new(height),
        }
    }

    #[test]
    fn test_lower_half_goes_above() {
        let anchor = place(Rect::new(500.0, 40.0, 120.0, 24.0), Viewport::new(800.0));
        assert_eq!(anchor.placement, Placement::Above);
        assert_eq!(anchor.top, 486.0);
        assert_eq!(anchor.translate_y_pct, -100.0);
        assert_eq!(anchor.left, 40.0);
        assert_eq!(anchor.z_index, Z_INDEX);
    }

    #[test]
    fn test_upper_half_goes_below() {
        let anchor = place(Rect::new(300.0, 40.0, 120.0, 24.0), Viewport::new(800.0));
        assert_eq!(anchor.placement, Placement::Below);
        assert_eq!(anchor.top, 338.0);
        assert_eq!(anchor.translate_y_pct, 0.0);
    }

    #[test]
    fn test_midpoint_goes_below() {
        let anchor = place(Rect::new(400.0, 0.0, 10.0, 10.0), Viewport::new(800.0));
        assert_eq!(anchor.placement, Placement::Below);
    }

    #[test]
    fn test_scroll_offsets_shift_anchor() {
        let viewport = Viewport { height: 800.0, scroll_x: 15.0, scroll_y: 1000.0 };
        let above = place(Rect::new(600.0, 40.0, 100.0, 20.0), viewport);
        assert_eq!(above.top, 1586.0);
        assert_eq!(above.left, 55.0);
        let below = place(Rect::new(100.0, 40.0, 100.0, 20.0), viewport);
        assert_eq!(below.top, 1134.0);
    }

    #[test]
    fn test_enter_then_leave() {
        let mut pop = Popover::new();
        assert!(!pop.is_open());
        pop.pointer_enter(&geometry_at(500.0, 800.0));
        assert!(pop.is_open());
        assert!(pop.style().is_visible());
        assert_eq!(pop.style().anchor.unwrap().placement, Placement::Above);

        pop.pointer_leave();
        assert_eq!(pop.state(), PopoverState::Closed);
        assert_eq!(pop.style(), PopoverStyle::HIDDEN);
    }

    #[test]
    fn test_reenter_while_open_keeps_first_measurement() {
        let mut pop = Popover::new();
        pop.pointer_enter(&geometry_at(500.0, 800.0));
        pop.pointer_enter(&geometry_at(100.0, 800.0));
        assert_eq!(pop.style().anchor.unwrap().placement, Placement::Above);
    }

    #[test]
    fn test_unmounted_trigger_opens_hidden() {
        let mut pop = Popover::new();
        pop.pointer_enter(&StaticGeometry { trigger: None, viewport: Viewport::new(800.0) });
        assert!(pop.is_open());
        assert!(!pop.style().is_visible());
    }
}

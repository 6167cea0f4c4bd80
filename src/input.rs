//! Input model: per-tick snapshots and the input source strategies.
//!
//! The engine and the screens never sample hardware; they consume one
//! [`InputSnapshot`] per tick, produced by whichever [`InputSource`] was
//! selected at startup. Edge detection and calibration math live here, on
//! the source side of the boundary.
//!
//! Two strategies cover the supported control hardware:
//! - [`AnalogPad`]: a two-axis stick with a configurable center,
//! - [`ButtonPad`]: four digital direction buttons.
//!
//! Both synthesize the same snapshot shape, so everything downstream is
//! scheme-agnostic.

use crate::config::{AXIS_MAX, AXIS_THRESHOLD};

/// Directions the input device can report.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The opposite direction; `None` stays `None`.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::None => Self::None,
        }
    }
}

/// Which control hardware is wired in. Chosen once at startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputScheme {
    Analog,
    Digital,
}

/// State of the input device at one tick. Read-only to screens.
#[derive(Clone, Copy, Default, Debug)]
pub struct InputSnapshot {
    /// Direction the device currently reports (level state).
    pub direction: Direction,
    /// `direction`, but only on the tick it changed; `None` otherwise.
    pub turned: Direction,
    /// True for exactly one snapshot per physical press of the start button.
    pub start_pressed: bool,
    /// Physical level state of the start button.
    pub start_down: bool,
    /// Uncalibrated axis values as sampled.
    pub raw_x: i32,
    pub raw_y: i32,
    /// Center-subtracted, clamped axis values.
    pub axis_x: i32,
    pub axis_y: i32,
}

/// Produces one input snapshot per tick.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;

    /// Adopt new center coordinates for axis calibration. Sources without
    /// axes ignore this.
    fn calibrate(&mut self, raw_x: i32, raw_y: i32) {
        let _ = (raw_x, raw_y);
    }
}

/// Rising-edge detector for the start button.
#[derive(Default)]
struct EdgeDetector {
    was_down: bool,
}

impl EdgeDetector {
    /// True only on the tick the state goes from released to pressed.
    fn rising(&mut self, is_down: bool) -> bool {
        let edge = is_down && !self.was_down;
        self.was_down = is_down;
        edge
    }
}

/// Direction-change detector; reports a direction only on the tick it
/// becomes current.
#[derive(Default)]
struct DirectionEdge {
    last: Direction,
}

impl DirectionEdge {
    fn update(&mut self, current: Direction) -> Direction {
        if current == self.last {
            Direction::None
        } else {
            self.last = current;
            current
        }
    }
}

// =============================================================================
// Analog Stick Source
// =============================================================================

/// Two-axis analog input with a calibratable center.
///
/// The host feeds raw axis samples and the start button level each tick;
/// `poll` subtracts the center, clamps to `±AXIS_MAX` and maps the dominant
/// axis to a direction once it passes `AXIS_THRESHOLD`. Positive X is right,
/// positive Y is up.
pub struct AnalogPad {
    raw_x: i32,
    raw_y: i32,
    start_down: bool,
    center_x: i32,
    center_y: i32,
    start_edge: EdgeDetector,
    turn_edge: DirectionEdge,
}

impl AnalogPad {
    /// Create a pad, adopting a persisted center when one exists.
    pub fn new(center: Option<(i16, i16)>) -> Self {
        let (center_x, center_y) = center.map_or((0, 0), |(x, y)| (i32::from(x), i32::from(y)));
        Self {
            raw_x: center_x,
            raw_y: center_y,
            start_down: false,
            center_x,
            center_y,
            start_edge: EdgeDetector::default(),
            turn_edge: DirectionEdge::default(),
        }
    }

    /// Feed the current raw axis sample.
    pub fn set_axes(&mut self, raw_x: i32, raw_y: i32) {
        self.raw_x = raw_x;
        self.raw_y = raw_y;
    }

    /// Feed the current start button level.
    pub fn set_start(&mut self, down: bool) {
        self.start_down = down;
    }
}

impl InputSource for AnalogPad {
    fn poll(&mut self) -> InputSnapshot {
        let axis_x = (self.raw_x - self.center_x).clamp(-AXIS_MAX, AXIS_MAX);
        let axis_y = (self.raw_y - self.center_y).clamp(-AXIS_MAX, AXIS_MAX);

        let direction = if axis_x.abs() > axis_y.abs() && axis_x.abs() >= AXIS_THRESHOLD {
            if axis_x > 0 { Direction::Right } else { Direction::Left }
        } else if axis_y.abs() > axis_x.abs() && axis_y.abs() >= AXIS_THRESHOLD {
            if axis_y > 0 { Direction::Up } else { Direction::Down }
        } else {
            Direction::None
        };

        InputSnapshot {
            direction,
            turned: self.turn_edge.update(direction),
            start_pressed: self.start_edge.rising(self.start_down),
            start_down: self.start_down,
            raw_x: self.raw_x,
            raw_y: self.raw_y,
            axis_x,
            axis_y,
        }
    }

    fn calibrate(&mut self, raw_x: i32, raw_y: i32) {
        self.center_x = raw_x;
        self.center_y = raw_y;
    }
}

// =============================================================================
// Four-Button Source
// =============================================================================

/// Four digital direction buttons plus start.
///
/// Synthesizes full-scale axis values so screens that visualize deflection
/// keep working under this scheme.
#[derive(Default)]
pub struct ButtonPad {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    start_down: bool,
    start_edge: EdgeDetector,
    turn_edge: DirectionEdge,
}

impl ButtonPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current button levels.
    pub fn set_buttons(&mut self, left: bool, right: bool, up: bool, down: bool, start: bool) {
        self.left = left;
        self.right = right;
        self.up = up;
        self.down = down;
        self.start_down = start;
    }
}

impl InputSource for ButtonPad {
    fn poll(&mut self) -> InputSnapshot {
        let (direction, axis_x, axis_y) = if self.left {
            (Direction::Left, -AXIS_MAX, 0)
        } else if self.right {
            (Direction::Right, AXIS_MAX, 0)
        } else if self.up {
            (Direction::Up, 0, AXIS_MAX)
        } else if self.down {
            (Direction::Down, 0, -AXIS_MAX)
        } else {
            (Direction::None, 0, 0)
        };

        InputSnapshot {
            direction,
            turned: self.turn_edge.update(direction),
            start_pressed: self.start_edge.rising(self.start_down),
            start_down: self.start_down,
            raw_x: axis_x,
            raw_y: axis_y,
            axis_x,
            axis_y,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Direction Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    // -------------------------------------------------------------------------
    // Analog Pad Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_analog_direction_detection() {
        let mut pad = AnalogPad::new(None);

        pad.set_axes(400, 0);
        assert_eq!(pad.poll().direction, Direction::Right);

        pad.set_axes(-400, 0);
        assert_eq!(pad.poll().direction, Direction::Left);

        pad.set_axes(0, 400);
        assert_eq!(pad.poll().direction, Direction::Up);

        pad.set_axes(0, -400);
        assert_eq!(pad.poll().direction, Direction::Down);
    }

    #[test]
    fn test_analog_below_threshold_is_none() {
        let mut pad = AnalogPad::new(None);
        pad.set_axes(AXIS_THRESHOLD - 1, 0);
        assert_eq!(pad.poll().direction, Direction::None, "deflection below threshold");
    }

    #[test]
    fn test_analog_dominant_axis_wins() {
        let mut pad = AnalogPad::new(None);
        pad.set_axes(350, 500);
        assert_eq!(pad.poll().direction, Direction::Up, "larger axis decides");
    }

    #[test]
    fn test_analog_clamps_to_axis_max() {
        let mut pad = AnalogPad::new(None);
        pad.set_axes(2000, -2000);
        let snap = pad.poll();
        assert_eq!(snap.axis_x, AXIS_MAX);
        assert_eq!(snap.axis_y, -AXIS_MAX);
        assert_eq!(snap.raw_x, 2000, "raw values pass through unclamped");
    }

    #[test]
    fn test_analog_center_subtraction() {
        let mut pad = AnalogPad::new(Some((500, 500)));
        pad.set_axes(500, 500);
        let snap = pad.poll();
        assert_eq!(snap.axis_x, 0, "centered stick reads zero");
        assert_eq!(snap.direction, Direction::None);

        pad.set_axes(900, 500);
        assert_eq!(pad.poll().direction, Direction::Right);
    }

    #[test]
    fn test_analog_recalibration() {
        let mut pad = AnalogPad::new(None);
        pad.set_axes(400, 0);
        assert_eq!(pad.poll().direction, Direction::Right);

        // After calibrating on the deflected position, the same sample is
        // the new rest position.
        pad.calibrate(400, 0);
        assert_eq!(pad.poll().direction, Direction::None);
    }

    #[test]
    fn test_turned_edge_fires_once_per_change() {
        let mut pad = AnalogPad::new(None);
        pad.set_axes(400, 0);
        assert_eq!(pad.poll().turned, Direction::Right, "first tick reports the turn");
        assert_eq!(pad.poll().turned, Direction::None, "held direction stops reporting");

        pad.set_axes(0, 0);
        assert_eq!(pad.poll().turned, Direction::None, "return to center is not a turn");

        pad.set_axes(400, 0);
        assert_eq!(pad.poll().turned, Direction::Right, "re-deflection reports again");
    }

    #[test]
    fn test_start_edge_fires_once_per_press() {
        let mut pad = AnalogPad::new(None);

        pad.set_start(true);
        let first = pad.poll();
        assert!(first.start_pressed, "press edge on first tick");
        assert!(first.start_down);

        let held = pad.poll();
        assert!(!held.start_pressed, "held button produces no second edge");
        assert!(held.start_down);

        pad.set_start(false);
        assert!(!pad.poll().start_pressed);

        pad.set_start(true);
        assert!(pad.poll().start_pressed, "new press after release fires again");
    }

    // -------------------------------------------------------------------------
    // Button Pad Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_buttons_map_to_directions() {
        let mut pad = ButtonPad::new();

        pad.set_buttons(true, false, false, false, false);
        let snap = pad.poll();
        assert_eq!(snap.direction, Direction::Left);
        assert_eq!(snap.axis_x, -AXIS_MAX, "synthesized full-scale deflection");

        pad.set_buttons(false, false, false, true, false);
        let snap = pad.poll();
        assert_eq!(snap.direction, Direction::Down);
        assert_eq!(snap.axis_y, -AXIS_MAX);

        pad.set_buttons(false, false, false, false, false);
        assert_eq!(pad.poll().direction, Direction::None);
    }

    #[test]
    fn test_buttons_priority_order() {
        let mut pad = ButtonPad::new();
        // Chords resolve left-first, matching the sampling order.
        pad.set_buttons(true, true, true, true, false);
        assert_eq!(pad.poll().direction, Direction::Left);
    }

    #[test]
    fn test_buttons_start_edge() {
        let mut pad = ButtonPad::new();
        pad.set_buttons(false, false, false, false, true);
        assert!(pad.poll().start_pressed);
        assert!(!pad.poll().start_pressed, "held start fires once");
    }
}

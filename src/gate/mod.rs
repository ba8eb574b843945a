mod connection;
mod store;

pub use connection::{find_connection_point, ConnectionPoint, PinDirection};
pub use store::GateStore;

use std::fmt;

use crate::math::{Point2, Rect, Vector2};

/// Maximum number of input slots on any gate.
pub const MAX_INPUTS: usize = 2;

/// Distance between a gate body and its connection points.
pub const PIN_OFFSET: f64 = 8.0;

/// Position of a gate in the ordered [`GateStore`].
///
/// Indices shift when an earlier gate is removed; holders must be rewritten
/// in the same operation (see [`WireStore::reindex_after_gate_removal`]).
///
/// [`WireStore::reindex_after_gate_removal`]: crate::wiring::WireStore::reindex_after_gate_removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GateIndex(pub usize);

impl GateIndex {
    /// Returns the raw position.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Rewrites this index after the gate at `removed` left the store.
    pub(crate) fn shift_past(&mut self, removed: GateIndex) {
        debug_assert_ne!(*self, removed, "reference to a removed gate survived");
        if self.0 > removed.0 {
            self.0 -= 1;
        }
    }
}

impl fmt::Display for GateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gate#{}", self.0)
    }
}

/// The logic function of a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    Input,
    Output,
    And,
    Or,
    Not,
    Nand,
    Nor,
}

impl GateKind {
    /// All kinds, in palette order.
    pub const ALL: [GateKind; 7] = [
        GateKind::Input,
        GateKind::Output,
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Nand,
        GateKind::Nor,
    ];

    /// Footprint (width, height) of the gate body.
    #[must_use]
    pub fn size(self) -> Vector2 {
        match self {
            GateKind::Input | GateKind::Output => Vector2::new(60.0, 40.0),
            _ => Vector2::new(75.0, 50.0),
        }
    }

    /// Number of usable input slots.
    #[must_use]
    pub fn input_count(self) -> usize {
        match self {
            GateKind::Input => 0,
            GateKind::Output | GateKind::Not => 1,
            GateKind::And | GateKind::Or | GateKind::Nand | GateKind::Nor => 2,
        }
    }

    /// Whether the gate exposes an output connection point.
    #[must_use]
    pub fn has_output(self) -> bool {
        self != GateKind::Output
    }

    /// Input gates are driven externally instead of by their slots.
    #[must_use]
    pub fn is_source(self) -> bool {
        self == GateKind::Input
    }

    /// Short label shown on the gate body.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GateKind::Input => "INP",
            GateKind::Output => "OUT",
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
        }
    }

    /// Applies the logic function to the two input slots.
    ///
    /// `Input` and `Output` pass slot 0 through.
    #[must_use]
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            GateKind::Input | GateKind::Output => a,
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Not => !a,
            GateKind::Nand => !(a && b),
            GateKind::Nor => !(a || b),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A placed logic gate.
///
/// Kind and footprint are fixed at construction; only the position and the
/// signal state change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    kind: GateKind,
    position: Point2,
    inputs: [bool; MAX_INPUTS],
    output: bool,
    /// Externally toggled bit, only meaningful for `Input` gates.
    switch: bool,
}

impl Gate {
    /// Creates a gate with its top-left corner at `position`, all signals low.
    #[must_use]
    pub fn new(kind: GateKind, position: Point2) -> Self {
        Self {
            kind,
            position,
            inputs: [false; MAX_INPUTS],
            output: false,
            switch: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Top-left corner of the body.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn set_position(&mut self, position: Point2) {
        self.position = position;
    }

    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.kind.size()
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size())
    }

    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.bounds().contains(point)
    }

    #[must_use]
    pub fn collides_with(&self, other: &Gate) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    /// Current value of an input slot. Unused and out-of-range slots read low.
    #[must_use]
    pub fn input(&self, slot: usize) -> bool {
        self.inputs.get(slot).copied().unwrap_or(false)
    }

    /// Output computed by the last propagation step.
    #[must_use]
    pub fn output(&self) -> bool {
        self.output
    }

    /// The externally toggled bit of an `Input` gate.
    #[must_use]
    pub fn switch(&self) -> bool {
        self.switch
    }

    /// Sets the external bit. Has no effect on the output until the next step.
    pub fn set_switch(&mut self, on: bool) {
        self.switch = on;
    }

    /// Whether `slot` is a usable input on this gate.
    #[must_use]
    pub fn has_slot(&self, slot: usize) -> bool {
        slot < self.kind.input_count()
    }

    /// Location of the output connection point.
    #[must_use]
    pub fn output_point(&self) -> Point2 {
        let size = self.size();
        Point2::new(
            self.position.x + size.x + PIN_OFFSET,
            self.position.y + size.y * 0.5,
        )
    }

    /// Location of the connection point for input `slot`.
    #[must_use]
    pub fn input_point(&self, slot: usize) -> Point2 {
        let size = self.size();
        let ratio = match (self.kind, slot) {
            (GateKind::Input | GateKind::Output, _) => 0.5,
            (_, 0) => 0.33,
            _ => 0.66,
        };
        Point2::new(
            self.position.x - PIN_OFFSET,
            self.position.y + size.y * ratio,
        )
    }

    /// Phase 1 of a propagation step: sources latch their switch, every other
    /// gate clears its slots.
    pub(crate) fn begin_step(&mut self) {
        if self.kind.is_source() {
            self.output = self.switch;
        } else {
            self.inputs = [false; MAX_INPUTS];
        }
    }

    pub(crate) fn set_input(&mut self, slot: usize, value: bool) {
        assert!(
            slot < MAX_INPUTS,
            "input slot {slot} out of range for {} gate",
            self.kind
        );
        self.inputs[slot] = value;
    }

    /// Phase 3 of a propagation step: recompute the output from the slots.
    pub(crate) fn evaluate(&mut self) {
        if !self.kind.is_source() {
            self.output = self.kind.apply(self.inputs[0], self.inputs[1]);
        }
    }
}

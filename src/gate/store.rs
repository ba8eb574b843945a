use std::ops::{Index, IndexMut};

use crate::error::TopologyError;
use crate::math::{Point2, Rect};

use super::{Gate, GateIndex, GateKind};

/// Ordered collection of placed gates.
///
/// A gate's identity is its position in the store. Removal is crate-private
/// so it always happens together with the wire reindexing done by
/// [`Circuit::delete_gate`](crate::Circuit::delete_gate).
#[derive(Debug, Default, Clone)]
pub struct GateStore {
    gates: Vec<Gate>,
}

impl GateStore {
    /// Creates a new, empty gate store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    /// Iterates gates together with their indices, in store order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (GateIndex, &Gate)> {
        self.gates
            .iter()
            .enumerate()
            .map(|(i, gate)| (GateIndex(i), gate))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Gate> {
        self.gates.iter_mut()
    }

    #[must_use]
    pub fn contains_index(&self, index: GateIndex) -> bool {
        index.0 < self.gates.len()
    }

    /// Returns a reference to the gate, or an error if the index is stale.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::GateNotFound` if no gate exists at `index`.
    pub fn gate(&self, index: GateIndex) -> Result<&Gate, TopologyError> {
        self.gates
            .get(index.0)
            .ok_or(TopologyError::GateNotFound(index.0))
    }

    /// Returns a mutable reference to the gate, or an error if the index is stale.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::GateNotFound` if no gate exists at `index`.
    pub fn gate_mut(&mut self, index: GateIndex) -> Result<&mut Gate, TopologyError> {
        self.gates
            .get_mut(index.0)
            .ok_or(TopologyError::GateNotFound(index.0))
    }

    /// Whether a gate of `kind` could be placed with its top-left corner at
    /// `top_left`: its footprint must not overlap any existing gate.
    #[must_use]
    pub fn can_place(&self, kind: GateKind, top_left: Point2) -> bool {
        let candidate = Gate::new(kind, top_left);
        !self.gates.iter().any(|gate| candidate.collides_with(gate))
    }

    /// Places a gate unless its footprint overlaps an existing gate.
    pub fn place(&mut self, kind: GateKind, top_left: Point2) -> Option<GateIndex> {
        if !self.can_place(kind, top_left) {
            tracing::debug!(%kind, x = top_left.x, y = top_left.y, "placement rejected: overlap");
            return None;
        }
        let index = GateIndex(self.gates.len());
        self.gates.push(Gate::new(kind, top_left));
        tracing::debug!(%kind, %index, "gate placed");
        Some(index)
    }

    /// Places a gate with its footprint centred on `center`.
    pub fn place_centered(&mut self, kind: GateKind, center: Point2) -> Option<GateIndex> {
        self.place(kind, center - kind.size() * 0.5)
    }

    /// Returns the first gate (store order) whose body contains `point`.
    #[must_use]
    pub fn gate_at(&self, point: &Point2) -> Option<GateIndex> {
        self.gates
            .iter()
            .position(|gate| gate.contains(point))
            .map(GateIndex)
    }

    /// Flips the external bit of an `Input` gate. Returns `false` for any
    /// other kind or a stale index.
    pub fn toggle_input(&mut self, index: GateIndex) -> bool {
        match self.gates.get_mut(index.0) {
            Some(gate) if gate.kind().is_source() => {
                gate.set_switch(!gate.switch());
                true
            }
            _ => false,
        }
    }

    /// Moves a gate without any collision check; overlap is only enforced at
    /// placement time.
    pub fn move_gate(&mut self, index: GateIndex, top_left: Point2) -> bool {
        match self.gates.get_mut(index.0) {
            Some(gate) => {
                gate.set_position(top_left);
                true
            }
            None => false,
        }
    }

    /// Bounding boxes of every gate not listed in `excluded`, in store order.
    #[must_use]
    pub fn obstacles_excluding(&self, excluded: &[GateIndex]) -> Vec<Rect> {
        self.iter_indexed()
            .filter(|(index, _)| !excluded.contains(index))
            .map(|(_, gate)| gate.bounds())
            .collect()
    }

    /// Removes a gate, shifting every later gate down by one index.
    pub(crate) fn remove(&mut self, index: GateIndex) -> Option<Gate> {
        (index.0 < self.gates.len()).then(|| self.gates.remove(index.0))
    }
}

impl Index<GateIndex> for GateStore {
    type Output = Gate;

    fn index(&self, index: GateIndex) -> &Gate {
        &self.gates[index.0]
    }
}

impl IndexMut<GateIndex> for GateStore {
    fn index_mut(&mut self, index: GateIndex) -> &mut Gate {
        &mut self.gates[index.0]
    }
}

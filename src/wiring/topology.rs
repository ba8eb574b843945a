use crate::error::TopologyError;
use crate::gate::{GateIndex, GateStore};
use crate::math::Point2;
use crate::routing::RouteSynthesizer;

use super::Wire;

/// Ordered collection of wires with index references into a [`GateStore`].
///
/// The store never owns gates; it only keeps their indices consistent. At
/// most one wire ends at any (gate, slot) pair, while fan-out is unlimited.
#[derive(Debug, Default, Clone)]
pub struct WireStore {
    wires: Vec<Wire>,
}

impl WireStore {
    /// Creates a new, empty wire store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wires.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wire> {
        self.wires.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Wire> {
        self.wires.iter_mut()
    }

    /// Returns the wire at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::WireNotFound` if no wire exists at `index`.
    pub fn wire(&self, index: usize) -> Result<&Wire, TopologyError> {
        self.wires
            .get(index)
            .ok_or(TopologyError::WireNotFound(index))
    }

    /// Whether some wire already terminates at `slot` of `dest`.
    #[must_use]
    pub fn is_slot_occupied(&self, dest: GateIndex, slot: usize) -> bool {
        self.wires.iter().any(|w| w.dest == dest && w.slot == slot)
    }

    /// Checks that `source`→`dest`:`slot` would be a legal new wire.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::GateNotFound` for a stale index,
    /// `TopologyError::NoOutput` when `source` has no output and
    /// `TopologyError::InvalidSlot` when `dest` has no such input slot.
    pub fn validate_endpoints(
        &self,
        gates: &GateStore,
        source: GateIndex,
        dest: GateIndex,
        slot: usize,
    ) -> Result<(), TopologyError> {
        let from = gates.gate(source)?;
        let to = gates.gate(dest)?;
        if !from.kind().has_output() {
            return Err(TopologyError::NoOutput(source.get()));
        }
        if !to.has_slot(slot) {
            return Err(TopologyError::InvalidSlot {
                gate: dest.get(),
                slot,
            });
        }
        Ok(())
    }

    /// Appends a wire from `source`'s output to `slot` of `dest` and routes it.
    ///
    /// No-op returning `false` when the slot is already driven, when
    /// `source == dest`, or when the endpoints are not a valid output/input
    /// pair.
    pub fn create_wire(
        &mut self,
        gates: &GateStore,
        source: GateIndex,
        dest: GateIndex,
        slot: usize,
        router: &RouteSynthesizer,
    ) -> bool {
        if source == dest || self.is_slot_occupied(dest, slot) {
            tracing::debug!(%source, %dest, slot, "wire rejected: self-loop or occupied slot");
            return false;
        }
        if let Err(e) = self.validate_endpoints(gates, source, dest, slot) {
            tracing::debug!(%source, %dest, slot, error = %e, "wire rejected");
            return false;
        }
        self.wires
            .push(Wire::routed(source, dest, slot, gates, router));
        tracing::debug!(%source, %dest, slot, wires = self.wires.len(), "wire created");
        true
    }

    /// Removes the first wire (store order) whose path passes within
    /// `threshold` of `point`.
    pub fn delete_wire_near(&mut self, point: &Point2, threshold: f64) -> bool {
        let Some(index) = self.wires.iter().position(|w| w.is_near(point, threshold)) else {
            return false;
        };
        let wire = self.wires.remove(index);
        tracing::debug!(index, source = %wire.source, dest = %wire.dest, "wire deleted");
        true
    }

    /// Removes every wire that starts or ends at `gate`. Returns how many
    /// were removed.
    pub fn remove_wires_for_gate(&mut self, gate: GateIndex) -> usize {
        let before = self.wires.len();
        self.wires.retain(|w| !w.touches(gate));
        before - self.wires.len()
    }

    /// Shifts every gate reference above `removed` down by one.
    ///
    /// Must run in the same operation as the gate store's own removal, after
    /// [`Self::remove_wires_for_gate`].
    pub fn reindex_after_gate_removal(&mut self, removed: GateIndex) {
        for wire in &mut self.wires {
            wire.source.shift_past(removed);
            wire.dest.shift_past(removed);
        }
    }

    /// Cascade for a gate deletion: drops incident wires, then reindexes.
    /// Returns how many wires were removed.
    pub fn on_gate_deleted(&mut self, gate: GateIndex) -> usize {
        let removed = self.remove_wires_for_gate(gate);
        self.reindex_after_gate_removal(gate);
        tracing::debug!(%gate, removed, remaining = self.wires.len(), "gate deletion cascaded");
        removed
    }

    /// Recomputes every wire's path against the current gate positions.
    pub fn reroute_all(&mut self, gates: &GateStore, router: &RouteSynthesizer) {
        for wire in &mut self.wires {
            wire.reroute(gates, router);
        }
    }
}

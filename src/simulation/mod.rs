//! One propagation step over the gate and wire stores.
//!
//! A step runs three fixed phases and never iterates to a fixed point:
//!
//! 1. Input gates latch their switch; every other gate clears its slots.
//! 2. Each wire, in store order, copies its source's current output into the
//!    destination slot and its own cached state.
//! 3. Every non-input gate recomputes its output from its slots.
//!
//! Phase 2 reads non-input outputs from the previous step, so each layer of
//! logic behind the first settles one step later. Feedback loops lag instead
//! of oscillating within a step.

use crate::gate::GateStore;
use crate::wiring::WireStore;

/// Runs one propagation step in place. `O(gates + wires)`, no allocation.
///
/// # Panics
///
/// Panics if a wire references a gate index outside `gates`, which can only
/// happen if a gate removal skipped [`WireStore::reindex_after_gate_removal`].
pub fn step(gates: &mut GateStore, wires: &mut WireStore) {
    for gate in gates.iter_mut() {
        gate.begin_step();
    }

    for wire in wires.iter_mut() {
        wire.assert_endpoints(gates);
        let signal = gates[wire.source].output();
        wire.state = signal;
        gates[wire.dest].set_input(wire.slot, signal);
    }

    for gate in gates.iter_mut() {
        gate.evaluate();
    }
}

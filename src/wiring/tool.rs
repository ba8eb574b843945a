use crate::gate::{ConnectionPoint, GateIndex, PinDirection};

use super::WireStore;

/// Two-click wire creation state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WireTool {
    #[default]
    Idle,
    /// An output was clicked; waiting for the destination input.
    PendingSource(GateIndex),
}

/// What a click did to the [`WireTool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Click not consumed (idle, and not on an output).
    Ignored,
    /// An output was picked as the wire source.
    Started(GateIndex),
    /// Click on empty space while pending.
    Cancelled,
    /// Click on a valid free input: the caller should create this wire.
    Connect {
        source: GateIndex,
        dest: GateIndex,
        slot: usize,
    },
    /// Click on an occupied input, the source gate itself, or another output.
    Rejected,
}

impl ToolAction {
    /// Whether the click was consumed by wiring.
    #[must_use]
    pub fn is_handled(self) -> bool {
        self != ToolAction::Ignored
    }
}

/// Highlight for the connection point under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionAffordance {
    Neutral,
    Valid,
    Invalid,
}

impl WireTool {
    #[must_use]
    pub fn pending_source(self) -> Option<GateIndex> {
        match self {
            WireTool::Idle => None,
            WireTool::PendingSource(source) => Some(source),
        }
    }

    /// Advances the state machine for a click that snapped to `target`
    /// (`None` for empty space).
    pub fn click(&mut self, target: Option<&ConnectionPoint>, wires: &WireStore) -> ToolAction {
        let action = match (*self, target) {
            (WireTool::Idle, Some(point)) if point.direction == PinDirection::Output => {
                *self = WireTool::PendingSource(point.gate);
                ToolAction::Started(point.gate)
            }
            (WireTool::Idle, _) => ToolAction::Ignored,
            (WireTool::PendingSource(_), None) => {
                *self = WireTool::Idle;
                ToolAction::Cancelled
            }
            (WireTool::PendingSource(source), Some(point)) => {
                *self = WireTool::Idle;
                if Self::accepts(source, point, wires) {
                    ToolAction::Connect {
                        source,
                        dest: point.gate,
                        slot: point.slot,
                    }
                } else {
                    ToolAction::Rejected
                }
            }
        };
        tracing::debug!(?action, state = ?self, "wire tool click");
        action
    }

    /// Returns to idle. Returns whether a pending wire was dropped.
    pub fn cancel(&mut self) -> bool {
        std::mem::take(self) != WireTool::Idle
    }

    /// Classifies the point under the cursor for highlighting.
    #[must_use]
    pub fn affordance(self, point: &ConnectionPoint, wires: &WireStore) -> ConnectionAffordance {
        match self {
            WireTool::Idle => ConnectionAffordance::Neutral,
            WireTool::PendingSource(source) if Self::accepts(source, point, wires) => {
                ConnectionAffordance::Valid
            }
            WireTool::PendingSource(_) => ConnectionAffordance::Invalid,
        }
    }

    /// Keeps a pending source valid across a gate removal: drops it if it was
    /// the removed gate, shifts it otherwise.
    pub fn on_gate_removed(&mut self, removed: GateIndex) {
        if let WireTool::PendingSource(source) = self {
            if *source == removed {
                *self = WireTool::Idle;
            } else {
                source.shift_past(removed);
            }
        }
    }

    fn accepts(source: GateIndex, point: &ConnectionPoint, wires: &WireStore) -> bool {
        point.is_input() && point.gate != source && !wires.is_slot_occupied(point.gate, point.slot)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gate::{GateKind, GateStore};
    use crate::math::Point2;
    use crate::routing::RouteSynthesizer;

    fn pin(gate: usize, direction: PinDirection, slot: usize) -> ConnectionPoint {
        ConnectionPoint {
            position: Point2::origin(),
            direction,
            gate: GateIndex(gate),
            slot,
        }
    }

    #[test]
    fn idle_click_on_output_starts() {
        let mut tool = WireTool::Idle;
        let action = tool.click(Some(&pin(2, PinDirection::Output, 0)), &WireStore::new());
        assert_eq!(action, ToolAction::Started(GateIndex(2)));
        assert_eq!(tool.pending_source(), Some(GateIndex(2)));
    }

    #[test]
    fn idle_click_elsewhere_is_ignored() {
        let mut tool = WireTool::Idle;
        let wires = WireStore::new();
        assert_eq!(tool.click(None, &wires), ToolAction::Ignored);
        assert_eq!(
            tool.click(Some(&pin(0, PinDirection::Input, 0)), &wires),
            ToolAction::Ignored
        );
        assert!(!ToolAction::Ignored.is_handled());
        assert_eq!(tool, WireTool::Idle);
    }

    #[test]
    fn pending_click_on_empty_space_cancels() {
        let mut tool = WireTool::PendingSource(GateIndex(0));
        assert_eq!(tool.click(None, &WireStore::new()), ToolAction::Cancelled);
        assert_eq!(tool, WireTool::Idle);
    }

    #[test]
    fn pending_click_on_free_input_connects() {
        let mut tool = WireTool::PendingSource(GateIndex(0));
        let action = tool.click(Some(&pin(1, PinDirection::Input, 1)), &WireStore::new());
        assert_eq!(
            action,
            ToolAction::Connect {
                source: GateIndex(0),
                dest: GateIndex(1),
                slot: 1
            }
        );
        assert_eq!(tool, WireTool::Idle);
    }

    #[test]
    fn pending_click_on_invalid_target_is_consumed() {
        let wires = WireStore::new();
        for target in [
            pin(0, PinDirection::Input, 0),
            pin(1, PinDirection::Output, 0),
        ] {
            let mut tool = WireTool::PendingSource(GateIndex(0));
            let action = tool.click(Some(&target), &wires);
            assert_eq!(action, ToolAction::Rejected);
            assert!(action.is_handled());
            assert_eq!(tool, WireTool::Idle);
        }
    }

    #[test]
    fn occupied_input_is_rejected() {
        let mut gates = GateStore::new();
        gates.place(GateKind::Input, Point2::new(0.0, 0.0)).unwrap();
        gates.place(GateKind::Input, Point2::new(0.0, 100.0)).unwrap();
        gates.place(GateKind::Not, Point2::new(200.0, 0.0)).unwrap();
        let mut wires = WireStore::new();
        assert!(wires.create_wire(
            &gates,
            GateIndex(0),
            GateIndex(2),
            0,
            &RouteSynthesizer::default()
        ));

        let target = pin(2, PinDirection::Input, 0);
        let tool = WireTool::PendingSource(GateIndex(1));
        assert_eq!(tool.affordance(&target, &wires), ConnectionAffordance::Invalid);
        let mut tool = tool;
        assert_eq!(tool.click(Some(&target), &wires), ToolAction::Rejected);
    }

    #[test]
    fn affordance_is_neutral_when_idle() {
        let point = pin(1, PinDirection::Input, 0);
        let wires = WireStore::new();
        assert_eq!(
            WireTool::Idle.affordance(&point, &wires),
            ConnectionAffordance::Neutral
        );
        assert_eq!(
            WireTool::PendingSource(GateIndex(0)).affordance(&point, &wires),
            ConnectionAffordance::Valid
        );
    }

    #[test]
    fn gate_removal_repairs_pending_source() {
        let mut tool = WireTool::PendingSource(GateIndex(3));
        tool.on_gate_removed(GateIndex(1));
        assert_eq!(tool, WireTool::PendingSource(GateIndex(2)));
        tool.on_gate_removed(GateIndex(2));
        assert_eq!(tool, WireTool::Idle);
    }

    #[test]
    fn cancel_reports_dropped_wire() {
        let mut tool = WireTool::PendingSource(GateIndex(0));
        assert!(tool.cancel());
        assert!(!tool.cancel());
    }
}

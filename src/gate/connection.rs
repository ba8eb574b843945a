use crate::math::Point2;

use super::{Gate, GateIndex, GateStore};

/// Which side of a gate a connection point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinDirection {
    Input,
    Output,
}

/// A connection point derived from a gate's kind and position.
///
/// Never stored: recomputed on every query so it always follows the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPoint {
    pub position: Point2,
    pub direction: PinDirection,
    pub gate: GateIndex,
    /// Input slot index; always 0 for the output.
    pub slot: usize,
}

impl ConnectionPoint {
    #[must_use]
    pub fn is_input(&self) -> bool {
        self.direction == PinDirection::Input
    }
}

impl Gate {
    /// Connection points of this gate: inputs in slot order, then the output.
    pub fn connection_points(&self, index: GateIndex) -> impl Iterator<Item = ConnectionPoint> + '_ {
        let inputs = (0..self.kind.input_count()).map(move |slot| ConnectionPoint {
            position: self.input_point(slot),
            direction: PinDirection::Input,
            gate: index,
            slot,
        });
        let output = self.kind.has_output().then(|| ConnectionPoint {
            position: self.output_point(),
            direction: PinDirection::Output,
            gate: index,
            slot: 0,
        });
        inputs.chain(output)
    }
}

/// Returns the first connection point within `snap_radius` of `position`.
///
/// Gates are scanned in store order and each gate's points in slot order, so
/// the result is the first hit, not the globally nearest one.
#[must_use]
pub fn find_connection_point(
    gates: &GateStore,
    position: &Point2,
    snap_radius: f64,
) -> Option<ConnectionPoint> {
    gates
        .iter_indexed()
        .flat_map(|(index, gate)| gate.connection_points(index))
        .find(|point| nalgebra::distance(&point.position, position) <= snap_radius)
}

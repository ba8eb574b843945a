use crate::gate::{GateIndex, GateStore};
use crate::math::distance_2d::point_to_polyline_dist;
use crate::math::Point2;
use crate::routing::{Route, RouteKind, RouteSynthesizer};

/// A directed connection from one gate's output to another gate's input slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub(crate) source: GateIndex,
    pub(crate) dest: GateIndex,
    pub(crate) slot: usize,
    pub(crate) state: bool,
    pub(crate) route: Route,
}

impl Wire {
    /// Creates a wire and routes it against the current gates.
    pub(crate) fn routed(
        source: GateIndex,
        dest: GateIndex,
        slot: usize,
        gates: &GateStore,
        router: &RouteSynthesizer,
    ) -> Self {
        Self {
            source,
            dest,
            slot,
            state: false,
            route: route_between(source, dest, slot, gates, router),
        }
    }

    #[must_use]
    pub fn source(&self) -> GateIndex {
        self.source
    }

    #[must_use]
    pub fn dest(&self) -> GateIndex {
        self.dest
    }

    /// Destination input slot.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Signal carried during the last propagation step.
    #[must_use]
    pub fn state(&self) -> bool {
        self.state
    }

    /// Ordered orthogonal waypoints, at least two.
    #[must_use]
    pub fn waypoints(&self) -> &[Point2] {
        &self.route.waypoints
    }

    /// Whether the current path is the unchecked fallback.
    #[must_use]
    pub fn route_kind(&self) -> RouteKind {
        self.route.kind
    }

    #[must_use]
    pub fn touches(&self, gate: GateIndex) -> bool {
        self.source == gate || self.dest == gate
    }

    /// Whether `point` lies within `threshold` of any segment of the path.
    #[must_use]
    pub fn is_near(&self, point: &Point2, threshold: f64) -> bool {
        point_to_polyline_dist(point, self.waypoints()) <= threshold
    }

    /// Recomputes the path against the current gate positions.
    ///
    /// # Panics
    ///
    /// Panics if either gate index is out of range, which means a gate
    /// removal skipped reindexing.
    pub(crate) fn reroute(&mut self, gates: &GateStore, router: &RouteSynthesizer) {
        self.route = route_between(self.source, self.dest, self.slot, gates, router);
    }

    pub(crate) fn assert_endpoints(&self, gates: &GateStore) {
        assert_in_store(self.source, self.dest, gates);
    }
}

/// Path from `source`'s output to `slot` of `dest`, avoiding every gate
/// except the two endpoints.
fn route_between(
    source: GateIndex,
    dest: GateIndex,
    slot: usize,
    gates: &GateStore,
    router: &RouteSynthesizer,
) -> Route {
    assert_in_store(source, dest, gates);
    let start = gates[source].output_point();
    let end = gates[dest].input_point(slot);
    let obstacles = gates.obstacles_excluding(&[source, dest]);
    router.route(start, end, &obstacles)
}

fn assert_in_store(source: GateIndex, dest: GateIndex, gates: &GateStore) {
    assert!(
        gates.contains_index(source) && gates.contains_index(dest),
        "wire {source} -> {dest} references a gate outside the store of {} gates",
        gates.len()
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gate::GateKind;

    fn two_gates() -> GateStore {
        let mut gates = GateStore::new();
        gates.place(GateKind::Input, Point2::new(0.0, 0.0)).unwrap();
        gates.place(GateKind::Not, Point2::new(200.0, 100.0)).unwrap();
        gates
    }

    #[test]
    fn routed_wire_connects_pins() {
        let gates = two_gates();
        let wire = Wire::routed(
            GateIndex(0),
            GateIndex(1),
            0,
            &gates,
            &RouteSynthesizer::default(),
        );
        assert_eq!(wire.route_kind(), RouteKind::Clear);
        assert_eq!(wire.waypoints().first(), Some(&gates[GateIndex(0)].output_point()));
        assert_eq!(wire.waypoints().last(), Some(&gates[GateIndex(1)].input_point(0)));
    }

    #[test]
    fn near_detects_path_proximity() {
        let gates = two_gates();
        let wire = Wire::routed(
            GateIndex(0),
            GateIndex(1),
            0,
            &gates,
            &RouteSynthesizer::default(),
        );
        let mid = wire.waypoints()[1];
        assert!(wire.is_near(&Point2::new(mid.x + 4.0, mid.y), 10.0));
        assert!(!wire.is_near(&Point2::new(500.0, 500.0), 10.0));
    }

    #[test]
    #[should_panic(expected = "outside the store")]
    fn stale_reference_is_fatal() {
        let gates = two_gates();
        let mut wire = Wire::routed(
            GateIndex(0),
            GateIndex(1),
            0,
            &gates,
            &RouteSynthesizer::default(),
        );
        wire.dest = GateIndex(7);
        wire.reroute(&gates, &RouteSynthesizer::default());
    }
}

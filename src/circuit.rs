//! The circuit facade driven by the owning application.

use crate::config::SimulatorConfig;
use crate::error::Result;
use crate::gate::{find_connection_point, ConnectionPoint, Gate, GateIndex, GateKind, GateStore};
use crate::math::Point2;
use crate::routing::{Route, RouteSynthesizer};
use crate::simulation;
use crate::wiring::{ConnectionAffordance, ToolAction, WireStore, WireTool};

/// Receives everything needed to draw a circuit. The core never draws.
pub trait DrawConsumer {
    fn draw_gate(&mut self, index: GateIndex, gate: &Gate);

    fn draw_wire(&mut self, waypoints: &[Point2], state: bool);

    /// The wire being dragged out of a pending source.
    fn draw_pending_wire(&mut self, _waypoints: &[Point2]) {}

    /// Highlight for the connection point under the cursor.
    fn draw_affordance(&mut self, _point: &ConnectionPoint, _affordance: ConnectionAffordance) {}
}

/// Gates, wires and the wiring tool of one editable circuit.
#[derive(Debug, Default, Clone)]
pub struct Circuit {
    gates: GateStore,
    wires: WireStore,
    tool: WireTool,
    router: RouteSynthesizer,
    config: SimulatorConfig,
}

impl Circuit {
    /// Creates an empty circuit with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty circuit using `config` for snapping, wire hits and
    /// routing clearance.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any distance in `config` is
    /// negative or non-finite.
    pub fn with_config(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            router: RouteSynthesizer::new(config.route_clearance),
            config,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    #[must_use]
    pub fn gates(&self) -> &GateStore {
        &self.gates
    }

    #[must_use]
    pub fn wires(&self) -> &WireStore {
        &self.wires
    }

    #[must_use]
    pub fn tool(&self) -> WireTool {
        self.tool
    }

    /// Places a gate unless it overlaps an existing one.
    pub fn place_gate(&mut self, kind: GateKind, top_left: Point2) -> Option<GateIndex> {
        self.gates.place(kind, top_left)
    }

    /// Places a gate centred on `cursor` unless it overlaps an existing one.
    pub fn place_gate_centered(&mut self, kind: GateKind, cursor: Point2) -> Option<GateIndex> {
        self.gates.place_centered(kind, cursor)
    }

    #[must_use]
    pub fn gate_at(&self, point: &Point2) -> Option<GateIndex> {
        self.gates.gate_at(point)
    }

    pub fn toggle_input(&mut self, index: GateIndex) -> bool {
        self.gates.toggle_input(index)
    }

    pub fn move_gate(&mut self, index: GateIndex, top_left: Point2) -> bool {
        self.gates.move_gate(index, top_left)
    }

    /// Deletes a gate with its incident wires and renumbers everything that
    /// referenced a later gate. Returns `false` for a stale index.
    pub fn delete_gate(&mut self, index: GateIndex) -> bool {
        if !self.gates.contains_index(index) {
            return false;
        }
        self.gates.remove(index);
        self.wires.on_gate_deleted(index);
        self.tool.on_gate_removed(index);
        tracing::debug!(%index, gates = self.gates.len(), "gate deleted");
        true
    }

    /// One simulation tick: propagate signals, then re-route every wire.
    pub fn step(&mut self) {
        simulation::step(&mut self.gates, &mut self.wires);
        self.wires.reroute_all(&self.gates, &self.router);
    }

    /// Creates a wire directly, bypassing the click state machine.
    pub fn create_wire(&mut self, source: GateIndex, dest: GateIndex, slot: usize) -> bool {
        self.wires
            .create_wire(&self.gates, source, dest, slot, &self.router)
    }

    /// Feeds a click to the wire tool. Returns whether the click was consumed.
    pub fn try_create_wire(&mut self, click: Point2) -> bool {
        let target = self.find_connection_point(&click);
        let action = self.tool.click(target.as_ref(), &self.wires);
        if let ToolAction::Connect { source, dest, slot } = action {
            self.create_wire(source, dest, slot);
        }
        action.is_handled()
    }

    /// Deletes the first wire passing near `click`.
    pub fn try_delete_wire(&mut self, click: Point2) -> bool {
        self.wires
            .delete_wire_near(&click, self.config.wire_hit_threshold)
    }

    /// Abandons a pending wire. Returns whether one was pending.
    pub fn cancel_wire(&mut self) -> bool {
        self.tool.cancel()
    }

    /// First connection point within the configured snap radius.
    #[must_use]
    pub fn find_connection_point(&self, position: &Point2) -> Option<ConnectionPoint> {
        find_connection_point(&self.gates, position, self.config.snap_radius)
    }

    /// The connection point under `cursor` and how it should be highlighted.
    #[must_use]
    pub fn affordance_at(&self, cursor: &Point2) -> Option<(ConnectionPoint, ConnectionAffordance)> {
        let point = self.find_connection_point(cursor)?;
        let affordance = self.tool.affordance(&point, &self.wires);
        Some((point, affordance))
    }

    /// Route from the pending source's output to `cursor`, avoiding every gate
    /// except the source. `None` when no wire is pending.
    #[must_use]
    pub fn preview_route(&self, cursor: Point2) -> Option<Route> {
        let source = self.tool.pending_source()?;
        let start = self.gates.gate(source).ok()?.output_point();
        let obstacles = self.gates.obstacles_excluding(&[source]);
        Some(self.router.route(start, cursor, &obstacles))
    }

    /// Hands gates, wires and cursor affordances to `consumer`.
    pub fn render<D: DrawConsumer>(&self, cursor: Option<Point2>, consumer: &mut D) {
        for (index, gate) in self.gates.iter_indexed() {
            consumer.draw_gate(index, gate);
        }
        for wire in self.wires.iter() {
            consumer.draw_wire(wire.waypoints(), wire.state());
        }
        let Some(cursor) = cursor else {
            return;
        };
        if let Some(route) = self.preview_route(cursor) {
            consumer.draw_pending_wire(&route.waypoints);
        }
        if let Some((point, affordance)) = self.affordance_at(&cursor) {
            consumer.draw_affordance(&point, affordance);
        }
    }
}

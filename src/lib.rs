//! Simulation core for small combinational logic circuits.
//!
//! Gates live in an ordered [`GateStore`], wires in an ordered [`WireStore`]
//! that references gates by position. Each [`Circuit::step`] propagates
//! signals in three fixed phases and re-routes every wire around the gate
//! bodies with the [`RouteSynthesizer`].

pub mod circuit;
pub mod config;
pub mod error;
pub mod gate;
pub mod math;
pub mod routing;
pub mod simulation;
pub mod wiring;

pub use circuit::{Circuit, DrawConsumer};
pub use config::SimulatorConfig;
pub use error::{GatesimError, Result};
pub use gate::{ConnectionPoint, Gate, GateIndex, GateKind, GateStore, PinDirection};
pub use routing::{Route, RouteKind, RouteSynthesizer};
pub use wiring::{ConnectionAffordance, ToolAction, Wire, WireStore, WireTool};

//! Wire topology: the wire store, its gate-index bookkeeping, and the
//! two-click creation state machine.

mod tool;
mod topology;
mod wire;

pub use tool::{ConnectionAffordance, ToolAction, WireTool};
pub use topology::WireStore;
pub use wire::Wire;

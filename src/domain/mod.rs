// Domain layer: the cleaning-record model and the store port. No business
// logic lives here; computation sits in core, concrete stores in adapters.

pub mod model;
pub mod ports;

// Domain layer: loan application models and ports (interfaces).

pub mod model;
pub mod ports;

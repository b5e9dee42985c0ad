// Domain layer: basket data and the shipping strategy port. No pricing logic lives here.

pub mod model;
pub mod ports;

// Domain layer: the user record and the ports the session depends on.

pub mod model;
pub mod ports;

// Application layer: the interactive console on top of the session.

pub mod console;
pub mod menu;

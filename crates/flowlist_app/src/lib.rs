//! Flowlist app: wires the pure core to the engine and the address bar.
pub mod address_bar;
pub mod config;
pub mod logging;
pub mod session;

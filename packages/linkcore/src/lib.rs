//! Station-link supervision core.
//!
//! Hardware-free model of station-mode link bring-up: lifecycle events in,
//! association directives out, with a bounded retry policy and a single-slot
//! wake latch for the consumer workload. The firmware crate binds these
//! types to the radio driver and network stack.
#![no_std]

pub mod config;
pub mod event;
pub mod outcome;
pub mod state;
pub mod supervisor;
pub mod wake;

pub use config::{AuthFloor, ConnectionConfig, Credentials};
pub use event::LinkEvent;
pub use outcome::Outcome;
pub use state::{ConnectionState, LinkPhase};
pub use supervisor::{ConnectionSupervisor, LinkDirective};
pub use wake::WakeSignal;

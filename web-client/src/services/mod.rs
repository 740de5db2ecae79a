// web-client/src/services/mod.rs
pub mod tickets;
pub mod workers;

pub use tickets::TicketService;
pub use workers::WorkerService;

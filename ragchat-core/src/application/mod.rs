pub mod controller;
pub mod exchange;
pub mod session;

pub use controller::ChatController;
pub use exchange::{Exchange, ExchangeOutcome, PendingExchange, Settlement};
pub use session::Session;

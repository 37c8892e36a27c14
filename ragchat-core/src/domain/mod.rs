pub mod health;
pub mod message;
pub mod view;

pub use health::HealthBanner;
pub use message::{ChatMessage, LoadingId, MessageRole};
pub use view::{ChatView, InputField};

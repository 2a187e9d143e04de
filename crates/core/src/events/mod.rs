pub mod bus;
pub mod types;

pub use bus::ContentBus;
pub use types::ContentEvent;

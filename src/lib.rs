pub mod browser;
pub mod config;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod store;

pub use browser::{ChromeSession, Session};
pub use config::Config;
pub use notify::{Notify, TelegramNotifier};
pub use store::ContactedStore;

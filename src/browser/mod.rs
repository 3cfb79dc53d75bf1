pub mod chrome;
pub mod session;

pub use chrome::ChromeSession;
pub use session::Session;

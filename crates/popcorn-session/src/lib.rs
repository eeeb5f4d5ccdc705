pub mod error;
pub mod session;
pub mod state;
pub mod watched;

pub use error::SessionError;
pub use session::Session;
pub use state::SessionState;
pub use watched::WatchedList;

pub mod guard;
pub mod layout;

pub use guard::{RequireRole, RequireSession};
pub use layout::{ErrorMessage, Header, Layout, LoadingSpinner, SuccessMessage};

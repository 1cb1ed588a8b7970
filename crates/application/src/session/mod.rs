//! Session lifecycle: dialog events and the login/init/logout use cases.

mod events;
mod service;

pub use events::{DialogState, SessionEvents};
pub use service::SessionService;

//! Login collaborator invoked by the submit action

mod noop;
mod traits;

pub use noop::NoopLoginHandler;
pub use traits::{LoginHandler, LoginOutcome};

#[cfg(test)]
pub use traits::MockLoginHandler;

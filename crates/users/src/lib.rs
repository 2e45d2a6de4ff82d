//! Users domain module.
//!
//! Shop users come in three kinds (administrator, registered user, guest) that
//! share the same record shape. Greeting and description text is rendered by the
//! presentation layer, not here.

pub mod user;

pub use user::{ContactDetails, User, UserKind, NOT_AVAILABLE};

//! Capabilities the orchestrator lends to its helpers.
//!
//! Helpers never keep a pointer back to their owner. Each call receives the
//! narrowest view that covers what the helper touches, borrowed for the
//! duration of that call only.

use crate::state::SharedState;
use crate::user::User;

/// Access to the user record plus the line output channel.
pub trait UserScope {
    fn user(&self) -> &User;

    fn user_mut(&mut self) -> &mut User;

    fn emit(&mut self, line: &str);
}

/// Everything in [`UserScope`] plus the country and the shared flags.
pub trait CountryScope: UserScope {
    fn country(&self) -> &str;

    fn set_country(&mut self, value: String);

    fn state(&self) -> &SharedState;
}

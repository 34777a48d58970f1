use std::rc::Rc;

use tracing::debug;

use crate::orchestrator::Orchestrator;
use crate::sink::LineSink;
use crate::state::{Flags, SharedState};
use crate::user::User;

/// Inputs to the scripted walkthrough: build, show, update country, update
/// role, show again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub user: User,
    pub flags: Flags,
    pub country: String,
    pub role: String,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            user: User::new("john doe"),
            flags: Flags::default(),
            country: "USA".to_string(),
            role: "Editor".to_string(),
        }
    }
}

impl Scenario {
    /// Runs every step against a freshly built shared state and returns the
    /// orchestrator so callers can inspect the end state.
    pub fn run<S: LineSink>(self, sink: S) -> Orchestrator<S> {
        let Scenario {
            user,
            flags,
            country,
            role,
        } = self;

        let state = Rc::new(SharedState::from(flags));
        let mut orchestrator = Orchestrator::new(state, user, sink);

        debug!("scenario: initial show");
        orchestrator.show();
        orchestrator.update_country(country);
        orchestrator.update_user_role(role);
        debug!("scenario: final show");
        orchestrator.show();

        orchestrator
    }
}

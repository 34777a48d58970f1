use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::helpers::{CountryHelper, RoleHelper};
use crate::scope::{CountryScope, UserScope};
use crate::sink::LineSink;
use crate::state::SharedState;
use crate::user::User;

/// Country every orchestrator starts with.
pub const DEFAULT_COUNTRY: &str = "Denmark";

/// Façade that owns the country, the user and a handle on the shared flags,
/// and forwards targeted mutations to its helpers.
pub struct Orchestrator<S: LineSink> {
    core: Core<S>,
    country_helper: CountryHelper,
    role_helper: RoleHelper,
}

/// The state the orchestrator lends to its helpers.
struct Core<S> {
    country: String,
    user: User,
    state: Rc<SharedState>,
    sink: S,
}

impl<S: LineSink> Orchestrator<S> {
    /// Builds both helpers, then runs the country helper's `apply` followed by
    /// the role helper's `apply`.
    pub fn new(state: Rc<SharedState>, user: User, sink: S) -> Self {
        debug!(user = %user.name, "constructing orchestrator");
        let mut orchestrator = Self {
            core: Core {
                country: DEFAULT_COUNTRY.to_string(),
                user,
                state,
                sink,
            },
            country_helper: CountryHelper::new(),
            role_helper: RoleHelper::new(),
        };

        orchestrator.country_helper.apply(&mut orchestrator.core);
        orchestrator.role_helper.apply(&mut orchestrator.core);
        orchestrator
    }

    pub fn country(&self) -> &str {
        &self.core.country
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.core.set_country(country.into());
    }

    pub fn user(&self) -> &User {
        &self.core.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.core.user
    }

    pub fn state(&self) -> &Rc<SharedState> {
        &self.core.state
    }

    /// Delegates to the country helper.
    pub fn update_country(&mut self, country: impl Into<String>) {
        self.country_helper.set_new_country(&mut self.core, country.into());
    }

    /// Delegates to the role helper.
    pub fn update_user_role(&mut self, role: impl Into<String>) {
        self.role_helper.set_user_role(&mut self.core, role.into());
    }

    /// Emits the user record, the country and both flags, one line each.
    pub fn show(&mut self) {
        let lines = [
            format!("User: {}", self.core.user),
            format!("Country: {}", self.core.country),
            format!("Loading: {}", self.core.state.is_loading()),
            format!("Saving: {}", self.core.state.is_saving()),
        ];
        for line in &lines {
            self.core.emit(line);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            user: self.core.user.clone(),
            country: self.core.country.clone(),
            is_loading: self.core.state.is_loading(),
            is_saving: self.core.state.is_saving(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.core.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.core.sink
    }

    pub fn into_sink(self) -> S {
        self.core.sink
    }
}

impl<S: LineSink> UserScope for Core<S> {
    fn user(&self) -> &User {
        &self.user
    }

    fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    fn emit(&mut self, line: &str) {
        trace!(line, "emit");
        self.sink.emit(line);
    }
}

impl<S: LineSink> CountryScope for Core<S> {
    fn country(&self) -> &str {
        &self.country
    }

    fn set_country(&mut self, value: String) {
        self.country = value;
    }

    fn state(&self) -> &SharedState {
        &self.state
    }
}

/// Point-in-time copy of everything [`Orchestrator::show`] prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub user: User,
    pub country: String,
    pub is_loading: bool,
    pub is_saving: bool,
}

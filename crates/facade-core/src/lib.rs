//! Façade/delegate composition: an [`Orchestrator`] owns a country, a user
//! record and a handle on [`SharedState`], and hands narrow capability views
//! to two helpers that each own one slice of the mutation logic.
//!
//! Everything observable goes through a [`LineSink`].

mod error;
mod helpers;
mod orchestrator;
mod scenario;
mod scope;
mod sink;
mod state;
mod user;

pub use error::{OutputError, OutputResult};
pub use helpers::{CountryHelper, RoleHelper, DEFAULT_TITLE};
pub use orchestrator::{Orchestrator, Snapshot, DEFAULT_COUNTRY};
pub use scenario::Scenario;
pub use scope::{CountryScope, UserScope};
pub use sink::{LineSink, Transcript, WriterSink};
pub use state::{Flags, SharedState};
pub use user::{OrAbsent, User, ABSENT};

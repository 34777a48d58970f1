//! Helper components the orchestrator delegates to.

mod country;
mod role;

pub use country::{CountryHelper, DEFAULT_TITLE};
pub use role::RoleHelper;

use tracing::debug;

use crate::scope::CountryScope;

/// Title every user receives when the orchestrator starts up.
pub const DEFAULT_TITLE: &str = "Product Manager";

/// Country and title logic, plus the one-shot saving flag.
#[derive(Debug, Default)]
pub struct CountryHelper {
    _private: (),
}

impl CountryHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the default title, lowers the saving flag and reports the
    /// current country, in that order.
    ///
    /// This is the only place the saving flag is ever written.
    pub fn apply(&self, scope: &mut impl CountryScope) {
        debug!(title = DEFAULT_TITLE, "country helper: applying defaults");
        scope.user_mut().title = Some(DEFAULT_TITLE.to_string());
        scope.state().set_is_saving(false);

        let line = format!("Country in Two: {}", scope.country());
        scope.emit(&line);
    }

    /// Stores `country` on the owner and reports the value read back.
    pub fn set_new_country(&self, scope: &mut impl CountryScope, country: String) {
        debug!(%country, "country helper: updating country");
        scope.set_country(country);

        let line = format!("Updated country in Two: {}", scope.country());
        scope.emit(&line);
    }
}

use tracing::debug;

use crate::scope::UserScope;
use crate::user::OrAbsent;

/// User-role logic.
#[derive(Debug, Default)]
pub struct RoleHelper {
    _private: (),
}

impl RoleHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports the role as it stands when the orchestrator starts up.
    pub fn apply(&self, scope: &mut impl UserScope) {
        debug!("role helper: applying defaults");
        let line = format!("User role in Three: {}", OrAbsent(scope.user().role()));
        scope.emit(&line);
    }

    pub fn set_user_role(&self, scope: &mut impl UserScope, role: String) {
        debug!(%role, "role helper: updating role");
        scope.user_mut().role = Some(role);

        let line = format!(
            "User role updated in Three: {}",
            OrAbsent(scope.user().role())
        );
        scope.emit(&line);
    }
}

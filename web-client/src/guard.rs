// web-client/src/guard.rs
use std::sync::Arc;

use common::models::role::Role;

use crate::auth::AuthService;
use crate::navigator::Navigator;

/// Guard lifecycle for one protected page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authorized,
    Redirecting { target: String },
}

/// Redirect gate consulted by every protected page on mount. Pages render
/// nothing but a loading indicator until the state leaves `Checking`.
pub struct RouteGuard {
    auth: Arc<AuthService>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
    state: GuardState,
    return_to: Option<String>,
}

impl RouteGuard {
    pub fn new(auth: Arc<AuthService>, navigator: Arc<dyn Navigator>, login_path: &str) -> Self {
        Self {
            auth,
            navigator,
            login_path: login_path.to_string(),
            state: GuardState::Checking,
            return_to: None,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Path remembered when an unauthenticated visitor was turned away,
    /// for post-login return. Yields once.
    pub fn take_return_path(&mut self) -> Option<String> {
        self.return_to.take()
    }

    /// Run the gate for the current route. Called on mount and again on
    /// every route or allowed-role change; callable from any state.
    pub fn evaluate(&mut self, requested_path: &str, allowed_roles: Option<&[Role]>) -> &GuardState {
        if !self.auth.is_authenticated() {
            return self.redirect_to_login(requested_path);
        }

        if let Some(allowed) = allowed_roles {
            let primary = self.auth.current_user().and_then(|identity| identity.primary_role());
            match primary {
                Some(role) if allowed.contains(&role) => {}
                Some(role) => {
                    // Wrong role goes home to its own dashboard, not to login
                    let target = role.dashboard_path();
                    tracing::debug!(
                        "Role {} not allowed on {}; redirecting to {}",
                        role, requested_path, target
                    );
                    self.navigator.push(&target);
                    self.state = GuardState::Redirecting { target };
                    return &self.state;
                }
                None => {
                    // Token without a readable identity: treat as unauthenticated
                    return self.redirect_to_login(requested_path);
                }
            }
        }

        self.state = GuardState::Authorized;
        &self.state
    }

    fn redirect_to_login(&mut self, requested_path: &str) -> &GuardState {
        tracing::debug!("Unauthenticated visit to {}; redirecting to login", requested_path);
        self.return_to = Some(requested_path.to_string());
        self.navigator.push(&self.login_path);
        self.state = GuardState::Redirecting {
            target: self.login_path.clone(),
        };
        &self.state
    }
}

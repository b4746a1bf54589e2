//! Auth gate
//!
//! 受保护页面在会话检查完成前不渲染；管理操作额外要求管理员身份。

use tracing::{info, warn};

use crate::api::{LinkApi, SessionUser};
use crate::errors::{GENERIC_FAILURE_MESSAGE, LinkdeckError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Checking,
    Authenticated(SessionUser),
    Denied(String),
}

#[derive(Debug, Clone)]
pub struct AuthGate {
    state: AuthState,
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthGate {
    pub fn new() -> Self {
        Self {
            state: AuthState::Checking,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, AuthState::Checking)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match &self.state {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin)
    }

    /// 回到检查中状态（重新检查前调用）
    pub fn reset(&mut self) {
        self.state = AuthState::Checking;
    }

    /// 调用 `GET /auth/session` 并更新状态
    pub async fn check(&mut self, api: &dyn LinkApi) -> &AuthState {
        self.state = match api.current_session().await {
            Ok(user) => {
                info!("Session: {} (admin: {})", user.username, user.is_admin);
                AuthState::Authenticated(user)
            }
            Err(e) => {
                warn!("Session check failed: {}", e);
                let reason = match e.status() {
                    Some(401 | 403) if e.user_message() == GENERIC_FAILURE_MESSAGE => {
                        "Not signed in".to_string()
                    }
                    _ => e.user_message(),
                };
                AuthState::Denied(reason)
            }
        };
        &self.state
    }

    pub fn require_user(&self) -> Result<&SessionUser> {
        match &self.state {
            AuthState::Authenticated(user) => Ok(user),
            AuthState::Checking => Err(LinkdeckError::unauthorized("Session check in progress")),
            AuthState::Denied(reason) => Err(LinkdeckError::unauthorized(reason.clone())),
        }
    }

    pub fn require_admin(&self) -> Result<&SessionUser> {
        let user = self.require_user()?;
        if user.is_admin {
            Ok(user)
        } else {
            Err(LinkdeckError::unauthorized("Admin permission required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> SessionUser {
        SessionUser {
            id: 1,
            username: "alice".into(),
            is_admin,
        }
    }

    #[test]
    fn test_pending_blocks_everything() {
        let gate = AuthGate::new();
        assert!(gate.is_pending());
        assert!(gate.require_user().is_err());
        assert!(gate.require_admin().is_err());
    }

    #[test]
    fn test_admin_guard() {
        let gate = AuthGate {
            state: AuthState::Authenticated(user(false)),
        };
        assert!(gate.require_user().is_ok());
        let err = gate.require_admin().unwrap_err();
        assert_eq!(err.user_message(), "Admin permission required");

        let gate = AuthGate {
            state: AuthState::Authenticated(user(true)),
        };
        assert!(gate.is_admin());
        assert!(gate.require_admin().is_ok());
    }
}

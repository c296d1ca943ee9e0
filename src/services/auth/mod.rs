// Auth service
// Derives the admin flag from a stored credential. There is no real
// enforcement here; the token just gates the admin chrome.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::user::{Role, User};

const TOKEN_FILE: &str = "token";

/// Stored-credential check backed by a token file in the config directory.
///
/// Tokens have the shape `<user-id>:<role>`. A token that fails to verify is
/// removed, mirroring the original client dropping a rejected credential.
pub struct AuthService {
    token_path: PathBuf,
}

impl AuthService {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            token_path: config_dir.join(TOKEN_FILE),
        }
    }

    /// The currently authenticated user, if a valid token is stored
    pub fn current_user(&self) -> Option<User> {
        let token = match fs::read_to_string(&self.token_path) {
            Ok(token) => token,
            Err(_) => return None,
        };

        match verify_token(token.trim()) {
            Some(user) => Some(user),
            None => {
                log::warn!("Stored token failed verification, clearing it");
                if let Err(err) = fs::remove_file(&self.token_path) {
                    log::warn!("Failed to clear invalid token: {err}");
                }
                None
            }
        }
    }

    /// True when the stored credential belongs to an admin
    pub fn is_admin(&self) -> bool {
        self.current_user().map(|u| u.is_admin()).unwrap_or(false)
    }

    /// Store a credential for `user`
    pub fn login(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let role = match user.role {
            Role::Admin => "admin",
            Role::User => "user",
        };
        fs::write(&self.token_path, format!("{}:{}", user.id, role))
            .context("Failed to store auth token")
    }

    /// Remove any stored credential
    pub fn logout(&self) {
        if self.token_path.exists() {
            if let Err(err) = fs::remove_file(&self.token_path) {
                log::warn!("Failed to remove auth token: {err}");
            }
        }
    }
}

fn verify_token(token: &str) -> Option<User> {
    let (id, role) = token.split_once(':')?;
    if id.is_empty() {
        return None;
    }

    let role = match role {
        "admin" => Role::Admin,
        "user" => Role::User,
        _ => return None,
    };

    Some(User {
        id: id.to_string(),
        role,
    })
}

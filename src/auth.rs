//! Credential resolution for remote operations.
//!
//! Push and pull need a usable ssh credential. A running agent (via
//! `SSH_AUTH_SOCK`) wins; otherwise the first standard private key under
//! `~/.ssh` is used. Resolution happens once at startup and failure is
//! fatal — the session never retries silently.

use std::path::{Path, PathBuf};

use crate::error::{Result, StashlyError};

/// Key file names probed under `~/.ssh`, in preference order.
const KEY_CANDIDATES: &[&str] = &["id_ed25519", "id_rsa", "id_ecdsa"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// An ssh agent is reachable; git picks it up from the environment.
    Agent,
    /// A specific private key file.
    KeyFile(PathBuf),
}

impl Credential {
    /// `GIT_SSH_COMMAND` override for key-file credentials. Agent
    /// credentials need nothing extra.
    pub fn ssh_command(&self) -> Option<String> {
        match self {
            Credential::Agent => None,
            Credential::KeyFile(path) => Some(format!(
                "ssh -i {} -o IdentitiesOnly=yes",
                path.display()
            )),
        }
    }
}

/// Resolve a credential from the process environment.
pub fn resolve_credential() -> Result<Credential> {
    let agent_sock = std::env::var_os("SSH_AUTH_SOCK").map(PathBuf::from);
    let ssh_dir = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".ssh"));

    resolve_from_parts(agent_sock.as_deref(), ssh_dir.as_deref())
}

fn resolve_from_parts(agent_sock: Option<&Path>, ssh_dir: Option<&Path>) -> Result<Credential> {
    if let Some(sock) = agent_sock
        && !sock.as_os_str().is_empty()
        && sock.exists()
    {
        return Ok(Credential::Agent);
    }

    if let Some(dir) = ssh_dir {
        for name in KEY_CANDIDATES {
            let key = dir.join(name);
            if key.is_file() {
                return Ok(Credential::KeyFile(key));
            }
        }
    }

    Err(StashlyError::BackendUnavailable(
        "no usable ssh credential: no agent socket and no key under ~/.ssh".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn agent_socket_wins_when_present() {
        let dir = tempdir().expect("failed to create temp dir");
        let sock = dir.path().join("agent.sock");
        fs::write(&sock, "").expect("failed to create socket stand-in");

        let cred = resolve_from_parts(Some(&sock), None).expect("agent should resolve");
        assert_eq!(cred, Credential::Agent);
    }

    #[test]
    fn missing_agent_falls_back_to_key_file() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("id_rsa"), "key").expect("failed to write key");

        let cred = resolve_from_parts(None, Some(dir.path())).expect("key should resolve");
        assert_eq!(cred, Credential::KeyFile(dir.path().join("id_rsa")));
    }

    #[test]
    fn key_candidates_are_probed_in_preference_order() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("id_rsa"), "key").expect("failed to write key");
        fs::write(dir.path().join("id_ed25519"), "key").expect("failed to write key");

        let cred = resolve_from_parts(None, Some(dir.path())).expect("key should resolve");
        assert_eq!(cred, Credential::KeyFile(dir.path().join("id_ed25519")));
    }

    #[test]
    fn stale_agent_socket_is_ignored() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing_sock = dir.path().join("gone.sock");
        fs::write(dir.path().join("id_ed25519"), "key").expect("failed to write key");

        let cred = resolve_from_parts(Some(&missing_sock), Some(dir.path()))
            .expect("key should resolve");
        assert!(matches!(cred, Credential::KeyFile(_)));
    }

    #[test]
    fn no_credential_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = resolve_from_parts(None, Some(dir.path()));
        assert!(result.is_err());
    }

    #[test]
    fn key_file_credential_builds_ssh_command() {
        let cred = Credential::KeyFile(PathBuf::from("/home/u/.ssh/id_ed25519"));
        assert_eq!(
            cred.ssh_command().as_deref(),
            Some("ssh -i /home/u/.ssh/id_ed25519 -o IdentitiesOnly=yes")
        );
        assert_eq!(Credential::Agent.ssh_command(), None);
    }
}

//! Git command lines used by the destination checkout.
//!
//! Each function only builds an [`Invocation`]; running it, and deciding
//! whether a failure is fatal, is up to the caller. Everything runs inside
//! the checkout directory, so clones target `.`.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::defaults::GIT_PROGRAM;
use crate::error::{Error, Result};
use crate::runner::Invocation;

/// `git clone --depth=1 --branch <branch> <url> .`
pub fn clone_branch(url: &str, branch: &str, dir: &Path) -> Invocation {
    Invocation::new(GIT_PROGRAM, dir).args(["clone", "--depth=1", "--branch", branch, url, "."])
}

/// `git clone --depth=1 <url> .` (remote's default branch)
pub fn clone_default(url: &str, dir: &Path) -> Invocation {
    Invocation::new(GIT_PROGRAM, dir).args(["clone", "--depth=1", url, "."])
}

/// `git switch --orphan <branch>`
pub fn switch_orphan(branch: &str, dir: &Path) -> Invocation {
    Invocation::new(GIT_PROGRAM, dir).args(["switch", "--orphan", branch])
}

/// `git config <key> <value>`, scoped to the repository in `dir`.
pub fn set_config(key: &str, value: &str, dir: &Path) -> Invocation {
    Invocation::new(GIT_PROGRAM, dir).args(["config", "--local", key, value])
}

/// `git rm -r -q --ignore-unmatch -- .`
///
/// Succeeds on an empty index, which is the state right after
/// `switch --orphan`.
pub fn remove_tracked(dir: &Path) -> Invocation {
    Invocation::new(GIT_PROGRAM, dir).args(["rm", "-r", "-q", "--ignore-unmatch", "--", "."])
}

/// `git add --all .`, stdout discarded.
pub fn add_all(dir: &Path) -> Invocation {
    Invocation::new(GIT_PROGRAM, dir)
        .args(["add", "--all", "."])
        .quiet()
}

/// `git commit --quiet -m <message>`
pub fn commit(message: &str, dir: &Path) -> Invocation {
    Invocation::new(GIT_PROGRAM, dir).args(["commit", "--quiet", "-m", message])
}

/// `git push --quiet <authenticated-url> <branch>`
///
/// `--quiet` keeps git from echoing the remote, so the embedded token does
/// not end up in CI logs.
pub fn push(authenticated_url: SecretString, branch: &str, dir: &Path) -> Invocation {
    Invocation::new(GIT_PROGRAM, dir)
        .args(["push", "--quiet"])
        .secret_arg(authenticated_url)
        .arg(branch)
}

/// Embeds `token` into the authority of `url`.
///
/// `<token>@` is inserted exactly once, immediately after the first `://`;
/// the rest of the URL is left byte-for-byte unchanged.
///
/// ```
/// use docupages::git::authenticated_url;
/// use secrecy::{ExposeSecret, SecretString};
///
/// let token = SecretString::new("t0k3n".into());
/// let url = authenticated_url("https://github.com/vpetrigo/caches.git", &token).unwrap();
/// assert_eq!(url.expose_secret(), "https://t0k3n@github.com/vpetrigo/caches.git");
/// ```
pub fn authenticated_url(url: &str, token: &SecretString) -> Result<SecretString> {
    let (scheme, rest) = url
        .split_once("://")
        .ok_or_else(|| Error::InvalidRepositoryUrl {
            url: url.to_string(),
            message: "missing '://' separator".to_string(),
        })?;

    if scheme.is_empty() {
        return Err(Error::InvalidRepositoryUrl {
            url: url.to_string(),
            message: "missing URL scheme".to_string(),
        });
    }

    let embedded = format!("{}://{}@{}", scheme, token.expose_secret(), rest);
    Ok(SecretString::new(embedded.into()))
}

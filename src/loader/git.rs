use crate::error::{Error, Result};
use crate::loader::interface::{Template, TemplateLoader};
use git2::{build::RepoBuilder, Cred, CredentialType, FetchOptions, RemoteCallbacks};
use std::path::PathBuf;
use url::Url;

/// Loader for templates from git repositories.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
    branch: Option<String>,
}

impl<S: AsRef<str>> GitLoader<S> {
    pub fn new(repo: S, branch: Option<String>) -> Self {
        Self { repo, branch }
    }

    /// Determines if a string represents a git repository URL.
    ///
    /// Supports:
    /// - HTTPS URLs: https://github.com/user/repo
    /// - Git URLs: git://github.com/user/repo
    /// - SSH URLs: git@github.com:user/repo
    /// - SSH URLs with explicit protocol: ssh://git@github.com/user/repo
    /// - Local repositories: file:///srv/git/repo
    pub fn is_git_url(s: &str) -> bool {
        if let Ok(url) = Url::parse(s) {
            return matches!(url.scheme(), "http" | "https" | "git" | "ssh" | "file");
        }
        Self::is_scp_like(s)
    }

    /// `user@host:owner/repo`, where the host looks like a hostname and the
    /// path has at least one separator.
    fn is_scp_like(s: &str) -> bool {
        if s.contains("://") {
            return false;
        }
        let Some((user, rest)) = s.split_once('@') else {
            return false;
        };
        let Some((host, path)) = rest.split_once(':') else {
            return false;
        };
        !user.is_empty() && host.contains('.') && !path.is_empty() && path.contains('/')
    }

    fn fetch_options<'cb>() -> FetchOptions<'cb> {
        let mut attempts = 0u8;
        let mut callbacks = RemoteCallbacks::new();
        // libgit2 keeps calling back while authentication fails; each
        // source of credentials is tried once.
        callbacks.credentials(move |_url, username_from_url, allowed| {
            attempts += 1;
            let username = username_from_url.unwrap_or("git");
            if allowed.contains(CredentialType::SSH_KEY) {
                match (attempts, default_ssh_key()) {
                    (1, _) => Cred::ssh_key_from_agent(username),
                    (2, Some(key)) => Cred::ssh_key(username, None, &key, None),
                    _ => Err(git2::Error::from_str("no usable SSH credentials")),
                }
            } else if allowed.contains(CredentialType::USERNAME) {
                Cred::username(username)
            } else if attempts == 1 && allowed.contains(CredentialType::DEFAULT) {
                Cred::default()
            } else {
                Err(git2::Error::from_str("authentication required"))
            }
        });

        let mut options = FetchOptions::new();
        options.remote_callbacks(callbacks);
        options
    }
}

fn default_ssh_key() -> Option<PathBuf> {
    let ssh_dir = PathBuf::from(std::env::var_os("HOME")?).join(".ssh");
    ["id_ed25519", "id_rsa"].iter().map(|name| ssh_dir.join(name)).find(|p| p.exists())
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    /// Clones the repository into a fresh temporary directory.
    ///
    /// The directory is removed when the returned `Template` is dropped, and
    /// right away when the clone fails.
    fn load(&self) -> Result<Template> {
        let repo_url = self.repo.as_ref();
        let workdir = tempfile::Builder::new().prefix("sprout-").tempdir()?;
        log::debug!("Cloning '{repo_url}' into '{}'", workdir.path().display());

        let mut builder = RepoBuilder::new();
        builder.fetch_options(Self::fetch_options());
        if let Some(branch) = &self.branch {
            log::debug!("Checking out branch '{branch}'");
            builder.branch(branch);
        }

        builder
            .clone(repo_url, workdir.path())
            .map_err(|e| Error::Fetch(format!("{repo_url}: {}", e.message())))?;

        Ok(Template::transient(workdir))
    }
}

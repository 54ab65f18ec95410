use crate::error::{GenSemverError, Result};
use git2::{
    Cred, CredentialType, DescribeFormatOptions, DescribeOptions, PushOptions, RemoteCallbacks,
    Repository as Git2Repo,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// libgit2 keeps asking for credentials until one works; give up after this many.
const MAX_CREDENTIAL_ATTEMPTS: u32 = 3;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Path of `path` relative to the working tree, as the index wants it.
    /// Relative inputs are resolved against the current directory.
    fn index_path(&self, path: &Path) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("repository has no working tree"))?
            .canonicalize()?;

        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        }
        .canonicalize()?;

        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                GenSemverError::from(git2::Error::from_str(&format!(
                    "'{}' is outside the working tree '{}'",
                    absolute.display(),
                    workdir.display()
                )))
            })
    }

    fn push_refspec(&self, remote_name: &str, refspec: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|e| GenSemverError::remote(format!("Cannot find remote '{}': {}", remote_name, e)))?;

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(remote_callbacks());

        debug!(remote = remote_name, refspec, "pushing");
        remote
            .push(&[refspec], Some(&mut push_options))
            .map_err(|e| {
                if e.class() == git2::ErrorClass::Net {
                    GenSemverError::remote(format!("Network error during push of {}: {}", refspec, e))
                } else {
                    GenSemverError::remote(format!("Push of {} failed: {}", refspec, e))
                }
            })
    }
}

/// Credentials for push: user/password embedded in an HTTPS URL, then SSH
/// keys from ~/.ssh, then the SSH agent, then libgit2 defaults.
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    let mut attempts = 0;

    callbacks.credentials(move |url, username_from_url, allowed_types| {
        attempts += 1;
        if attempts > MAX_CREDENTIAL_ATTEMPTS {
            return Err(git2::Error::from_str(&format!(
                "authentication failed for {}",
                redact(url)
            )));
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            if let Some((user, password)) = url_credentials(url) {
                return Cred::userpass_plaintext(&user, &password);
            }
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            let user = username_from_url.unwrap_or("git");
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(user, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(user) {
                return Ok(cred);
            }
        }

        Cred::default()
    });

    callbacks.push_update_reference(|refname, status| match status {
        Some(status) => Err(git2::Error::from_str(&format!(
            "remote rejected {}: {}",
            refname, status
        ))),
        None => Ok(()),
    });

    callbacks
}

/// User and password embedded in a URL, percent-decoded
fn url_credentials(url: &str) -> Option<(String, String)> {
    let parsed = url::Url::parse(url).ok()?;
    let password = parsed.password()?;
    let user = urlencoding::decode(parsed.username()).ok()?.into_owned();
    let password = urlencoding::decode(password).ok()?.into_owned();
    Some((user, password))
}

/// URL with any password removed, for messages
fn redact(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) if parsed.password().is_some() => {
            let _ = parsed.set_password(None);
            parsed.to_string()
        }
        _ => url.to_string(),
    }
}

impl super::Repository for Git2Repository {
    fn describe_tags(&self) -> Result<Option<String>> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        let description = match self.repo.describe(&options) {
            Ok(description) => description,
            Err(e) => {
                debug!(error = %e, "describe found no tag");
                return Ok(None);
            }
        };

        match description.format(Some(&DescribeFormatOptions::new())) {
            Ok(output) => Ok(Some(output)),
            Err(e) => {
                debug!(error = %e, "describe output could not be formatted");
                Ok(None)
            }
        }
    }

    fn last_commit_message(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        let message = match commit.message() {
            Some(message) => message.to_string(),
            None => String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        };
        Ok(message)
    }

    fn stage_file_forced(&self, path: &Path) -> Result<()> {
        let relative = self.index_path(path)?;
        let mut index = self.repo.index()?;

        // add_path does not consult .gitignore, which is what `add -f` needs
        index.add_path(&relative)?;
        index.write()?;

        debug!(path = %relative.display(), "staged");
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;
        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        if parent.tree_id() == tree_oid {
            return Err(GenSemverError::Git(git2::Error::from_str(
                "nothing to commit, working tree clean",
            )));
        }

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        debug!(%oid, "committed");
        Ok(())
    }

    fn push_head(&self, remote: &str, branch: &str) -> Result<()> {
        self.push_refspec(remote, &format!("HEAD:refs/heads/{}", branch))
    }

    fn set_push_url(&self, remote: &str, url: &str) -> Result<()> {
        self.repo
            .remote_set_pushurl(remote, Some(url))
            .map_err(|e| GenSemverError::remote(format!("Cannot set push URL of '{}': {}", remote, e)))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo.tag_lightweight(name, head.as_object(), false)?;
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        self.push_refspec(remote, &format!("refs/tags/{}:refs/tags/{}", tag_name, tag_name))
    }
}

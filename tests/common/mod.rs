//! Shared fixtures: throwaway git repositories built with git2

#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MERGE_MESSAGE: &str =
    "Merge branch 'feature' into 'main'\n\nAdd search\n\nSee merge request group/project!7\n";

/// A working repository with a local identity, plus a bare remote named `origin`
pub struct TempGitRepo {
    pub dir: TempDir,
    pub remote_dir: TempDir,
    pub repo: Repository,
}

impl TempGitRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let remote_dir = TempDir::new().unwrap();

        let repo = Repository::init(dir.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Release Bot").unwrap();
            config.set_str("user.email", "release-bot@example.com").unwrap();
        }

        Repository::init_bare(remote_dir.path()).unwrap();
        repo.remote("origin", remote_dir.path().to_str().unwrap())
            .unwrap();

        TempGitRepo {
            dir,
            remote_dir,
            repo,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn remote_url(&self) -> String {
        self.remote_dir.path().to_str().unwrap().to_string()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path().join("package.json")
    }

    /// Write a file and commit it on top of HEAD
    pub fn commit_file(&self, name: &str, contents: &str, message: &str) -> Oid {
        fs::write(self.path().join(name), contents).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let signature = Signature::now("Developer", "dev@example.com").unwrap();
        let parents: Vec<_> = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<_> = parents.iter().collect();

        self.repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parent_refs,
            )
            .unwrap()
    }

    /// Lightweight tag on HEAD
    pub fn tag_head(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .unwrap();
    }

    pub fn head_message(&self) -> String {
        let repo = Repository::open(self.path()).unwrap();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        head.message().unwrap().to_string()
    }

    pub fn remote(&self) -> Repository {
        Repository::open_bare(self.remote_dir.path()).unwrap()
    }
}

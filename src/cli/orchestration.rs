//! Release workflow orchestration
//!
//! Runs the pipeline top to bottom: inspect tags, resolve the merge request
//! labels, pick the next version, rewrite the manifest, then commit, push
//! and tag. There is no rollback: a failure after the commit leaves the
//! commit in place.

use tracing::{info, warn};

use crate::analyzer::VersionAnalyzer;
use crate::config::{CiEnvironment, Config};
use crate::domain::{push_url_from, LabelSet, MergeRequestRef, TagDescription, Version};
use crate::error::Result;
use crate::git::Repository;
use crate::manifest;
use crate::platform::ProjectApi;

/// Arguments for the release workflow
///
/// Decoupled from the clap `Args` so the workflow can be driven
/// programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Values supplied by the CI job
    pub ci: CiEnvironment,

    /// Compute and report the version without changing anything
    pub dry_run: bool,
}

/// How the workflow ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// HEAD already carries a tag; nothing was changed
    AlreadyTagged,
    /// Manifest committed, pushed and tagged
    Published,
    /// Version computed, no side effects
    DryRun,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version released, or the existing tag when already tagged
    pub version: String,

    pub outcome: WorkflowOutcome,
}

/// Main release workflow
///
/// # Returns
///
/// The released (or existing) version, or the first error hit. Errors are
/// never retried.
pub fn run_release_workflow<R: Repository, P: ProjectApi>(
    repo: &R,
    api: &P,
    config: &Config,
    args: &WorkflowArgs,
) -> Result<WorkflowResult> {
    let version = match repo.describe_tags()?.map(|output| TagDescription::parse(&output)) {
        None => {
            warn!(
                initial_version = %config.initial_version,
                "no tags found, starting from the initial version"
            );
            Version::parse(&config.initial_version)?
        }
        Some(TagDescription::Tagged(tag)) => {
            info!(%tag, "HEAD is already tagged, nothing to do");
            return Ok(WorkflowResult {
                version: tag,
                outcome: WorkflowOutcome::AlreadyTagged,
            });
        }
        Some(description) => {
            let last = description.version()?;
            let labels = resolve_labels(repo, api, &args.ci)?;
            let analyzer = VersionAnalyzer::new(config.labels.clone());
            let next = analyzer.next_version(&last, &labels);
            info!(describe = description.as_str(), %next, "computed next version");
            next
        }
    };
    let version = version.to_string();

    if args.dry_run {
        info!(
            manifest = %config.manifest_path.display(),
            branch = ?args.ci.ref_name,
            remote = %config.remote,
            %version,
            "dry run: would update manifest, commit, push and tag"
        );
        return Ok(WorkflowResult {
            version,
            outcome: WorkflowOutcome::DryRun,
        });
    }

    manifest::update_version(&config.manifest_path, &version)?;
    publish(repo, config, &args.ci, &version)?;

    Ok(WorkflowResult {
        version,
        outcome: WorkflowOutcome::Published,
    })
}

/// Find the merge request named in the HEAD commit message and fetch its
/// labels. The reference is extracted, and the CI variables the API needs are
/// checked, before any request is made.
pub fn resolve_labels<R: Repository, P: ProjectApi>(
    repo: &R,
    api: &P,
    ci: &CiEnvironment,
) -> Result<LabelSet> {
    let message = repo.last_commit_message()?;
    let reference = MergeRequestRef::extract(&message)?;
    info!(merge_request = %reference, "resolved merge request");

    ci.server_url()?;
    ci.private_token()?;
    let project_id = ci.project_id()?;

    api.authenticate()?;
    let project = api.project(project_id)?;
    let labels = api.merge_request_labels(&project, reference.iid)?;

    info!(labels = %labels.representation(), "fetched merge request labels");
    Ok(labels)
}

/// Commit the manifest, push the commit, then tag over SSH.
pub fn publish<R: Repository>(
    repo: &R,
    config: &Config,
    ci: &CiEnvironment,
    version: &str,
) -> Result<()> {
    let branch = ci.ref_name()?;
    let push_url = push_url_from(ci.repository_url()?)?;
    let message = format!("release {} [ci skip]", version);

    repo.stage_file_forced(&config.manifest_path)?;
    repo.commit(&message)?;
    repo.push_head(&config.remote, branch)?;
    info!(branch, %message, "pushed release commit");

    repo.set_push_url(&config.remote, &push_url)?;

    repo.create_tag(version)?;
    repo.push_tag(&config.remote, version)?;
    info!(tag = version, remote = %config.remote, "pushed tag");

    Ok(())
}

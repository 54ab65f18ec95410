use anyhow::{Context, Result};
use clap::Parser;

use gen_semver::cli::{run_release_workflow, WorkflowArgs};
use gen_semver::config::{self, CiEnvironment};
use gen_semver::git::Git2Repository;
use gen_semver::platform::GitLabClient;
use gen_semver::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "gen-semver",
    version,
    about = "Tag CI builds with a semantic version derived from merge request labels"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "JSON manifest whose version field is updated")]
    manifest: Option<String>,

    #[arg(short, long, help = "Remote to push the release commit and tag to")]
    remote: Option<String>,

    #[arg(long, help = "Compute the version without changing anything")]
    dry_run: bool,

    #[arg(short, long, help = "Log git and API details")]
    verbose: bool,

    #[command(flatten)]
    ci: CiEnvironment,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(version) => {
            ui::print_version(&version);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<String> {
    let mut config = config::load_config(args.config.as_deref()).context("loading configuration")?;
    if let Some(manifest) = args.manifest {
        config.manifest_path = manifest.into();
    }
    if let Some(remote) = args.remote {
        config.remote = remote;
    }

    let repo = Git2Repository::open(".").context("opening git repository")?;
    // Only reached when HEAD is ahead of a tag; the workflow checks both are set first.
    let api = GitLabClient::new(
        args.ci.server_url.clone().unwrap_or_default(),
        args.ci.private_token.clone().unwrap_or_default(),
    )?;

    let workflow_args = WorkflowArgs {
        ci: args.ci,
        dry_run: args.dry_run,
    };
    let result = run_release_workflow(&repo, &api, &config, &workflow_args)?;

    Ok(result.version)
}

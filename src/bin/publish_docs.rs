use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use doc_release::cli::{self, orchestration};
use doc_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "publish-docs",
    about = "Publish generated API documentation into the versioned hosting branch"
)]
struct Args {
    #[arg(long, help = "GitHub organization name")]
    github_org: String,

    #[arg(long, help = "Repository name")]
    repo_name: String,

    #[arg(long, help = "Version to publish (optional)")]
    version: Option<String>,

    #[arg(short = 'C', long, default_value = ".", help = "Project directory")]
    project_dir: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let publish_args = orchestration::PublishArgs {
        github_org: args.github_org,
        repo_name: args.repo_name,
        version: args.version,
        project_dir: args.project_dir,
        config_path: args.config,
    };

    match orchestration::run_publish(&publish_args) {
        Ok((report, request)) => {
            ui::display_publish_report(&report);
            ui::display_manual_push_instruction(&request.checkout_dir, &request.branch);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

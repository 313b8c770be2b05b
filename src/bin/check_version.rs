use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use doc_release::checker::CheckOutcome;
use doc_release::cli::{self, orchestration};
use doc_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "check-version",
    about = "Check version consistency between the build configuration and a release tag"
)]
struct Args {
    #[arg(help = "Git tag to check against (optional; omit for snapshot mode)")]
    tag: Option<String>,

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

    let check_args = orchestration::CheckArgs {
        tag: args.tag,
        project_dir: args.project_dir,
        config_path: args.config,
    };

    match orchestration::run_check(&check_args) {
        Ok(CheckOutcome::Release { tag }) => {
            ui::display_success(&format!("Version consistency check passed: '{}'", tag));
            ExitCode::SUCCESS
        }
        Ok(CheckOutcome::Snapshot { version }) => {
            ui::display_success(&format!("Version '{}' not yet released", version));
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

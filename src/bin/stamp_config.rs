use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use doc_release::cli::{self, orchestration};
use doc_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "stamp-config",
    about = "Stamp the project version into a documentation generator configuration"
)]
struct Args {
    #[arg(help = "Path to the documentation generator configuration (e.g. Doxyfile)")]
    config_file: PathBuf,

    #[arg(help = "Version to set (optional; defaults to the declared version + -SNAPSHOT)")]
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

    let stamp_args = orchestration::StampArgs {
        config_file: args.config_file,
        version: args.version,
        project_dir: args.project_dir,
        config_path: args.config,
    };

    match orchestration::run_stamp(&stamp_args) {
        Ok(outcome) => {
            match outcome.warning() {
                Some(warning) => ui::display_warning(&warning),
                None => ui::display_success(&format!(
                    "Updated {} with version {}",
                    outcome.path.display(),
                    outcome.version
                )),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

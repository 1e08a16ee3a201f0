use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use ppcheck_cli::cli_args::Args;
use ppcheck_cli::launch::{load_manifest, report_fault};
use ppcheck_cli::session::{Session, SystemClipboard, TerminalPrompter};
use ppcheck_core::config::Settings;
use ppcheck_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let settings = Settings::default().with_copy_to_clipboard(args.copy_clipboard);
    let manifest = load_manifest(&args.project_path, &mut io::stdout())?;

    let mut session = Session::new(
        &manifest,
        &settings,
        TerminalPrompter::default(),
        SystemClipboard::new(settings.clipboard_hold),
    );
    session.run()
}

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = execute() {
        println!("{}", report_fault(&e));
    }

    ExitCode::SUCCESS
}

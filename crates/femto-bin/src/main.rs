//! femto entrypoint.

mod editor;

use anyhow::Result;
use clap::Parser;
use core_input::KeyDecoder;
use core_render::clear_screen;
use core_state::{EditorState, Viewport};
use core_terminal::{RawModeGuard, StdinSource, viewport_size};
use editor::{Editor, open_document};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// Rows reserved below the text area: status bar and message bar.
const RESERVED_ROWS: usize = 2;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "femto", version, about = "femto editor")] // minimal metadata
struct Args {
    /// Optional path to open at startup. If omitted an empty buffer is used.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `femto.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Fatal tier: leave the user a clean screen, then report.
            let _ = clear_screen(&mut io::stdout());
            error!(target: "runtime", error = %format!("{e:#}"), "fatal");
            eprintln!("femto: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    info!(target: "runtime", "startup");
    let config = core_config::load_from(args.config.clone())?;
    let tab_stop = config.effective_tab_stop();

    let document = match args.path.as_deref() {
        Some(path) => open_document(path, tab_stop)?,
        None => core_text::Document::new(tab_stop),
    };

    let _raw = RawModeGuard::enable()?;
    let mut source = StdinSource::spawn()?;
    let (rows, cols) = viewport_size(&mut source)?;
    let viewport = Viewport::new(rows.saturating_sub(RESERVED_ROWS), cols);
    info!(target: "runtime", rows, cols, "viewport ready");

    let mut state = EditorState::new(document, viewport, config.effective_quit_confirm());
    state.set_status("HELP: Ctrl-S = save | Ctrl-Q = quit");

    Editor::new(state, KeyDecoder::new(source), io::stdout()).run()
}

/// Route tracing to `femto.log`; stdout belongs to the renderer and must
/// never see log lines.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("femto.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "femto.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(()) => Some(guard),
        // Global subscriber already installed; drop the guard so the
        // writer shuts down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime", ?info, "panic");
            default_panic(info);
        }));
    });
}

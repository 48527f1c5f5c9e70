use extension_icons::{logging, run, IconsLayout};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init(cfg!(debug_assertions), None);

    let layout = match IconsLayout::locate() {
        Ok(layout) => layout,
        Err(e) => {
            tracing::error!("failed to locate icons directory: {e:#}");
            println!("ERROR: {e:#}");
            return ExitCode::from(1);
        }
    };

    let outcome = run(&layout);
    ExitCode::from(outcome.exit_code())
}

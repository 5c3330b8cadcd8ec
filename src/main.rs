//! Demo window: steer a free camera with touch or the mouse and watch the
//! pose in the log (`RUST_LOG=debug`). Pass a TOML preset path to override
//! the default options.

use std::path::Path;

use touchcam::{options::Options, Viewer};

fn main() {
    env_logger::init();

    // Optional first argument: a TOML options preset.
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("Loaded options from '{path}'");
                options
            }
            Err(e) => {
                log::error!("Failed to load options from '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

// SPDX-License-Identifier: MPL-2.0
use iced_alerts::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .init();

    let mut args = pico_args::Arguments::from_env();

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            log::warn!("ignoring --config-dir: {err}");
            None
        }
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        log::warn!("unused arguments: {leftover:?}");
    }

    app::run(Flags { config_dir })
}

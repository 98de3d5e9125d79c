use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{runtime::ConfigErrors, Appender, Config, Root},
};

const LOG_CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER_NAME: &str = "stderr";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    // no config next to the working directory, keep warnings visible anyway
    if let Ok(config) = fallback_config() {
        if let Err(e) = log4rs::init_config(config) {
            eprintln!("Unable to initialise logging: {}", e);
        }
    }
}

fn fallback_config() -> Result<Config, ConfigErrors> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER_NAME, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER_NAME)
                .build(LevelFilter::Warn),
        )
}

pub fn log_stage(stage: &str, width: u32, height: u32) {
    log::info!("{}: {}x{} ({} pixels)", stage, width, height, width as u64 * height as u64);
}

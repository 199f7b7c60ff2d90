use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Configures the logger explicitly so `RUST_LOG` has no say in the level.
pub fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    builder
}

pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    builder(level)
        .try_init()
        .context("Logger was already initialised")
}

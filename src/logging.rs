//! Logging sink initialization
//!
//! Status lines carry a local timestamp plus the source file and line of the
//! call site. Filtering follows the usual RUST_LOG conventions.

use chrono::Local;
use env_logger::Builder;
use std::io::Write;

/// Initialize the process-wide logger. Call once, from the binary.
pub fn init() {
    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}:{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

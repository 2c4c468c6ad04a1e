//! Logging setup.
//!
//! Library code only emits through the `log` facade. Binaries and tests call
//! [`init_log`] once to install an `env_logger` backend driven by `RUST_LOG`.

use std::io::Write;

use env_logger::Builder;

/// Install the `env_logger` backend, printing `time [level] [file:line] message`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_log() {
    let mut builder = Builder::from_default_env();
    let _ = builder
        .format(|buf, record| {
            let ts = buf.timestamp();
            writeln!(
                buf,
                "{} [{}] [{}:{}] {}",
                ts,
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .is_test(cfg!(test))
        .try_init();
}

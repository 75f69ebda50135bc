use log::{LevelFilter, SetLoggerError};

/// Installs the global logger: the browser console on wasm, stdout
/// elsewhere. Everything is dispatched; `level` is applied as the global
/// max level so it can be changed later with [`set_level`].
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let dispatch = fern::Dispatch::new().level(LevelFilter::Trace);

    #[cfg(target_arch = "wasm32")]
    let dispatch = dispatch
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(fern::Output::call(console_log::log));

    #[cfg(not(target_arch = "wasm32"))]
    let dispatch = dispatch
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stdout());

    dispatch.apply()?;
    set_level(level);
    Ok(())
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

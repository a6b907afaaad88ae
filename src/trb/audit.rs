use chrono::Local;

/// Runs `operation`, then logs its name with the time it finished.
///
/// The shell wraps each operator-facing call with this; the core itself never logs.
pub fn logged<T>(name: &str, operation: impl FnOnce() -> T) -> T {
    let result = operation();

    log::info!("{}: {}", Local::now().format("%Y-%m-%d %H:%M:%S%.6f"), name.to_uppercase());

    result
}

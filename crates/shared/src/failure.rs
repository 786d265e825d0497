use tracing::error;

/// Log `error` with `message`, then panic so the binary exits with a failure.
pub fn log_and_panic<Err: core::fmt::Display>(error: Err, message: &str) -> ! {
    error!("{message}: {error}");

    panic!("{message}: {error}");
}

/// Ends a binary on errors it cannot recover from.
pub trait Failure<T> {
    /// Unwrap the value, or log the error under `message` and panic.
    fn or_log_and_panic(self, message: &str) -> T;
}

impl<T, E: core::fmt::Display> Failure<T> for Result<T, E> {
    fn or_log_and_panic(self, message: &str) -> T {
        self.unwrap_or_else(|error| log_and_panic(error, message))
    }
}

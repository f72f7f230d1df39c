//! Error logging for rejected operations.

use osdf_core::FrameError;

/// Log a rejected operation at `error` level and pass the result through.
pub(crate) fn report<T>(op: &'static str, result: Result<T, FrameError>) -> Result<T, FrameError> {
    if let Err(err) = &result {
        tracing::error!(op, %err, "operation rejected");
    }
    result
}

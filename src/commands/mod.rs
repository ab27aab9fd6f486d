use miette::{IntoDiagnostic as _, Result};
use tokio::runtime::Handle;

pub mod json;
pub mod show;

// Drive an async fetch from the synchronous command layer, reusing an
// ambient tokio runtime when one exists.
pub(crate) fn block_on_runtime_aware<F, T>(future: F) -> Result<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    match Handle::try_current() {
        Ok(handle) => tokio::task::block_in_place(|| handle.block_on(future)),
        Err(_) => {
            let runtime = tokio::runtime::Runtime::new().into_diagnostic()?;
            runtime.block_on(future)
        }
    }
}

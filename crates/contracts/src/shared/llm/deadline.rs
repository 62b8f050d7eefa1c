//! Deadline for a single model call

use super::types::GenerationError;
use futures::future::{select, Either};
use std::future::Future;
use std::pin::pin;

/// Race `request` against `deadline`
///
/// When the deadline fires first, `on_timeout` runs so the caller can abort the
/// underlying request, and the call fails with [`GenerationError::Timeout`].
pub async fn with_deadline<T, R, D>(
    request: R,
    deadline: D,
    timeout_secs: u32,
    on_timeout: impl FnOnce(),
) -> Result<T, GenerationError>
where
    R: Future<Output = Result<T, GenerationError>>,
    D: Future<Output = ()>,
{
    match select(pin!(request), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            on_timeout();
            log::warn!("Gemini request exceeded {}s, giving up", timeout_secs);
            Err(GenerationError::Timeout(timeout_secs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use std::cell::Cell;

    #[test]
    fn test_request_before_deadline_wins() {
        let aborted = Cell::new(false);
        let result = block_on(with_deadline(
            ready(Ok::<_, GenerationError>("<p>ok</p>")),
            pending::<()>(),
            120,
            || aborted.set(true),
        ));
        assert_eq!(result, Ok("<p>ok</p>"));
        assert!(!aborted.get());
    }

    #[test]
    fn test_expired_deadline_aborts_request() {
        let aborted = Cell::new(false);
        let result = block_on(with_deadline(
            pending::<Result<String, GenerationError>>(),
            ready(()),
            120,
            || aborted.set(true),
        ));
        assert_eq!(result, Err(GenerationError::Timeout(120)));
        assert!(aborted.get());
    }

    #[test]
    fn test_request_error_passes_through() {
        let result = block_on(with_deadline(
            ready(Err::<String, _>(GenerationError::EmptyResponse)),
            pending::<()>(),
            120,
            || {},
        ));
        assert_eq!(result, Err(GenerationError::EmptyResponse));
    }
}

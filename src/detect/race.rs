use futures_util::future::{select_ok, BoxFuture};
use tracing::debug;

use crate::error::{OpenError, Result};

/// Drive every candidate concurrently and resolve with the first success.
///
/// Fails with [`OpenError::NotDetected`] once all candidates have failed, or
/// immediately when there are none.
pub async fn first_ok<T>(candidates: Vec<BoxFuture<'_, Result<T>>>) -> Result<T> {
    if candidates.is_empty() {
        return Err(OpenError::NotDetected);
    }
    match select_ok(candidates).await {
        Ok((value, _pending)) => Ok(value),
        Err(last) => {
            debug!("all candidates failed, last error: {last}");
            Err(OpenError::NotDetected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::time::Duration;

    fn ok_after(ms: u64, value: &'static str) -> BoxFuture<'static, Result<&'static str>> {
        async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            Ok(value)
        }
        .boxed()
    }

    fn err_now() -> BoxFuture<'static, Result<&'static str>> {
        async { Err(OpenError::PathMissing("/nope".into())) }.boxed()
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let got = first_ok(vec![ok_after(200, "slow"), err_now(), ok_after(5, "fast")])
            .await
            .unwrap();
        assert_eq!(got, "fast");
    }

    #[tokio::test]
    async fn test_all_failing_is_not_detected() {
        let got = first_ok(vec![err_now(), err_now()]).await;
        assert_eq!(got, Err(OpenError::NotDetected));
    }

    #[tokio::test]
    async fn test_no_candidates_is_not_detected() {
        let got = first_ok::<()>(Vec::new()).await;
        assert_eq!(got, Err(OpenError::NotDetected));
    }
}

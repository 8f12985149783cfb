//! Status-code classification shared by every GitHub request.

use crate::error::FeedbackError;

/// Maps non-success responses onto named failure kinds.
///
/// `resource` names what was requested and ends up in the `NotFound` message.
/// GitHub reports an exhausted quota as 403 with `x-ratelimit-remaining: 0`,
/// so that case is told apart from an ordinary 403.
pub async fn check_response(
    resp: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, FeedbackError> {
    let status = resp.status().as_u16();
    match status {
        200..=299 => Ok(resp),
        401 => Err(FeedbackError::Unauthorized),
        404 => Err(FeedbackError::NotFound(resource.to_string())),
        429 => Err(FeedbackError::RateLimited),
        403 if quota_exhausted(&resp) => Err(FeedbackError::RateLimited),
        403 => Err(FeedbackError::Forbidden(resp.text().await.unwrap_or_default())),
        _ => Err(FeedbackError::Api {
            status,
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

fn quota_exhausted(resp: &reqwest::Response) -> bool {
    resp.headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim() == "0")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_remaining(status: u16, remaining: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("x-ratelimit-remaining", remaining)
                .body("")
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "[]"), "repo").await.is_ok());
    }

    #[tokio::test]
    async fn not_found_names_the_resource() {
        let err = check_response(mock_response(404, ""), "repository octo/docs")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::NotFound(_)));
        assert_eq!(err.to_string(), "repository octo/docs not found or not accessible");
    }

    #[tokio::test]
    async fn unauthorized() {
        let err = check_response(mock_response(401, ""), "repo").await.unwrap_err();
        assert!(matches!(err, FeedbackError::Unauthorized));
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let err = check_response(mock_response(429, ""), "repo").await.unwrap_err();
        assert!(matches!(err, FeedbackError::RateLimited));
    }

    #[tokio::test]
    async fn forbidden_with_empty_quota_is_rate_limited() {
        let err = check_response(mock_response_with_remaining(403, "0"), "repo")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::RateLimited));
    }

    #[tokio::test]
    async fn forbidden_with_quota_left_is_forbidden() {
        let err = check_response(mock_response_with_remaining(403, "42"), "repo")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Forbidden(_)));
    }

    #[tokio::test]
    async fn other_failures_keep_status_and_body() {
        let err = check_response(mock_response(500, "boom"), "repo").await.unwrap_err();
        match err {
            FeedbackError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

use super::*;

#[test]
fn chat_rejection_uses_error_body() {
    let err = chat_rejection(502, r#"{"error": "Upstream model failed", "details": "timeout"}"#);
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 502,
            error: Some("Upstream model failed".to_owned()),
            details: Some("timeout".to_owned()),
        }
    );
}

#[test]
fn chat_rejection_falls_back_to_status_for_html_bodies() {
    assert_eq!(chat_rejection(500, "<html>Internal Server Error</html>"), ApiError::Status(500));
}

#[test]
fn chat_rejection_falls_back_to_status_for_empty_json() {
    assert_eq!(chat_rejection(404, "{}"), ApiError::Status(404));
}

#[cfg(not(feature = "csr"))]
mod native_stubs {
    use super::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = future.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn fetches_report_transport_errors_outside_browser() {
        assert!(matches!(block_on(fetch_notifications("/api/notifications")), Err(ApiError::Transport(_))));
        assert!(matches!(block_on(fetch_account_info("/api/account/info")), Err(ApiError::Transport(_))));
        assert!(matches!(block_on(fetch_settings("/api/settings")), Err(ApiError::Transport(_))));
    }

    #[test]
    fn send_chat_reports_transport_error_outside_browser() {
        let request = ChatRequest { message: "hi".to_owned(), history: Vec::new() };
        assert!(matches!(block_on(send_chat("/api/ai/chat", &request)), Err(ApiError::Transport(_))));
    }
}

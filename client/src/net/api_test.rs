use super::*;

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("tok1"), "Bearer tok1");
}

#[test]
fn board_list_failed_message_includes_status() {
    assert_eq!(board_list_failed_message(401), "board list failed: 401");
}

#[test]
fn rejected_display_includes_service_message() {
    assert_eq!(ApiError::Rejected(Some("nope".to_owned())).to_string(), "rejected: nope");
    assert_eq!(ApiError::Rejected(None).to_string(), "rejected: no message");
}

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::*;

    // Single-future poller; the stubs never suspend.
    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn calls_are_unavailable_off_browser() {
        let endpoints = Endpoints::from_base("https://fn.example.test");
        let err = block_on(exchange_token(&endpoints, "abc")).unwrap_err();
        assert_eq!(err, ApiError::Network("not available on server".to_owned()));
        assert!(block_on(fetch_boards(&endpoints, "tok")).is_err());
        assert!(block_on(parse_product(&endpoints, "https://shop.test/x")).is_err());
    }
}

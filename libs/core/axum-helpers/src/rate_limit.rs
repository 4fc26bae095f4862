//! Keyed per-IP rate limiting for sensitive endpoints.
//!
//! Built on the `governor` crate's keyed rate limiter (GCRA). Each client IP
//! gets its own budget; the limiter is shared across requests via `Arc`.

use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Default budget for authentication endpoints: 5 requests per 15 minutes.
///
/// The replenish period is the full window, so GCRA hands back one permit
/// per window and any window-length interval admits at most the burst.
pub const AUTH_BURST: u32 = 5;
pub const AUTH_WINDOW_SECS: u64 = 900;

/// Per-IP rate limiter.
#[derive(Clone)]
pub struct IpRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<IpAddr>>,
}

impl IpRateLimiter {
    /// Create a limiter that admits `burst` requests, replenishing one
    /// permit every `replenish_interval`.
    pub fn new(burst: u32, replenish_interval: Duration) -> Self {
        let burst = NonZeroU32::new(burst.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(replenish_interval)
            .unwrap_or_else(|| Quota::per_minute(burst))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(DefaultKeyedRateLimiter::keyed(quota)),
        }
    }

    /// Limiter for authentication routes: 5 requests per 15 minutes per IP.
    pub fn for_auth() -> Self {
        Self::new(AUTH_BURST, Duration::from_secs(AUTH_WINDOW_SECS))
    }

    /// Check whether a request from `ip` is within budget.
    pub fn check(&self, ip: IpAddr) -> bool {
        self.limiter.check_key(&ip).is_ok()
    }
}

/// Resolve the client IP for rate limiting.
///
/// Prefers the first entry of `x-forwarded-for` (set by reverse proxies),
/// then the peer address from `ConnectInfo`. Falls back to the unspecified
/// address so that requests without either share a single bucket.
fn client_ip(request: &Request) -> IpAddr {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse::<IpAddr>().ok());

    forwarded
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        })
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Middleware that rejects over-budget requests with 429.
///
/// The response body is stable so clients can match on it:
///
/// ```json
/// {"status": 429, "error": "Too many requests, please try again later."}
/// ```
///
/// # Example
/// ```ignore
/// use axum_helpers::rate_limit::{IpRateLimiter, rate_limit_middleware};
///
/// let auth_routes = Router::new()
///     .route("/auth/login", post(login))
///     .layer(axum::middleware::from_fn_with_state(
///         IpRateLimiter::for_auth(),
///         rate_limit_middleware,
///     ));
/// ```
pub async fn rate_limit_middleware(
    State(limiter): State<IpRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request);

    if !limiter.check(ip) {
        tracing::warn!(client_ip = %ip, "Rate limit exceeded");
        let body = serde_json::json!({
            "status": 429,
            "error": "Too many requests, please try again later.",
        });
        return (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_allows_burst_then_blocks() {
        let limiter = IpRateLimiter::for_auth();
        let addr = ip("203.0.113.7");

        for _ in 0..5 {
            assert!(limiter.check(addr));
        }
        assert!(!limiter.check(addr));
    }

    #[test]
    fn test_window_admits_at_most_burst() {
        // Scaled-down window: keep hammering the limiter for most of one
        // window length and count how many requests get through.
        let window = Duration::from_millis(400);
        let limiter = IpRateLimiter::new(5, window);
        let addr = ip("203.0.113.9");

        let start = std::time::Instant::now();
        let mut admitted = 0;
        while start.elapsed() < window * 3 / 4 {
            if limiter.check(addr) {
                admitted += 1;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(admitted, 5);
    }

    #[test]
    fn test_separate_ips_have_separate_budgets() {
        let limiter = IpRateLimiter::for_auth();
        let first = ip("203.0.113.7");
        let second = ip("203.0.113.8");

        for _ in 0..5 {
            assert!(limiter.check(first));
        }
        assert!(!limiter.check(first));
        assert!(limiter.check(second));
    }

    #[test]
    fn test_client_ip_prefers_forwarded_header() {
        let request = HttpRequest::builder()
            .header("x-forwarded-for", "198.51.100.1, 10.0.0.1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(client_ip(&request), ip("198.51.100.1"));
    }

    #[test]
    fn test_client_ip_falls_back_to_connect_info() {
        let mut request = HttpRequest::builder().body(Body::empty()).unwrap();
        let addr: SocketAddr = "192.0.2.9:5142".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(client_ip(&request), ip("192.0.2.9"));
    }

    #[test]
    fn test_client_ip_defaults_to_unspecified() {
        let request = HttpRequest::builder().body(Body::empty()).unwrap();
        assert_eq!(client_ip(&request), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }
}

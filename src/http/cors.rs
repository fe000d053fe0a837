//! Cross-origin policy.
//!
//! Browsers reject `Access-Control-Allow-Origin: *` on credentialed requests,
//! so when credentials are allowed the request's origin, method and headers
//! are mirrored back instead of using wildcards.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build the permissive CORS layer described by `config`.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allow_credentials {
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    } else {
        CorsLayer::permissive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[test]
    fn test_builds_with_credentials() {
        let config = CorsConfig {
            enabled: true,
            allow_credentials: true,
        };
        // tower-http rejects credentials combined with wildcards when layering.
        let _router: axum::Router = axum::Router::new()
            .route("/", get(|| async {}))
            .layer(cors_layer(&config));
    }

    #[test]
    fn test_builds_without_credentials() {
        let config = CorsConfig {
            enabled: true,
            allow_credentials: false,
        };
        let _router: axum::Router = axum::Router::new()
            .route("/", get(|| async {}))
            .layer(cors_layer(&config));
    }
}

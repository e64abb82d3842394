//! CORS middleware configuration
//!
//! The dashboard frontend is served from a separate origin during
//! development, so the API allows cross-origin requests.

use tower_http::cors::CorsLayer;

/// Create CORS layer for development (allows any origin)
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_creation() {
        let _cors = cors_layer();
    }
}

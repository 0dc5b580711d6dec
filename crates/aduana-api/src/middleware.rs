//! Middleware for the API. The browser client is served from a different
//! origin, so CORS stays permissive here.
use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}

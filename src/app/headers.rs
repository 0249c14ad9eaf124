use axum::http::{header, HeaderName};

pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Rendered avatars and asset files never change for a given URL.
pub const IMMUTABLE_CACHE: (HeaderName, &str) = (
    header::CACHE_CONTROL,
    "public, max-age=31536000, immutable",
);

pub const LISTING_CACHE: (HeaderName, &str) = (
    header::CACHE_CONTROL,
    "public, max-age=300, stale-while-revalidate=3600",
);

//! Route configuration
//!
//! - **`router`** - router assembly and fallback
//! - **`api_routes`** - the API endpoint table

/// Router assembly
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;

//! Client Module
//!
//! The client-side half of the application as a UI-toolkit-free view-model
//! layer: an HTTP API client plus pure state machines a rendering shell
//! drives.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs       - Module exports and documentation
//! ├── api.rs       - Reqwest API client with cookie-held session
//! ├── renderer.rs  - Form view model: render dispatch, value collection
//! ├── builder.rs   - Reorder engine with the drag interaction model
//! └── router.rs    - Session-gated route reducer
//! ```
//!
//! Everything except `api` is synchronous, serializable state updated by
//! pure functions; the shell owns the event loop and the widgets. `api` is
//! async and non-blocking so no call ever stalls the interface thread.

/// HTTP API client
pub mod api;

/// Form renderer view model
pub mod renderer;

/// Form builder / reorder engine
pub mod builder;

/// Session-gated route reducer
pub mod router;

pub use api::{ApiClient, ClientError};
pub use builder::FormBuilderState;
pub use renderer::{render_field, FormMsg, FormViewModel, RenderedField, SubmitStatus};
pub use router::{reduce, GateEvent, GateState, Route};

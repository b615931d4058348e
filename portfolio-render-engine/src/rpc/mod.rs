//! JSON-RPC 2.0 bridge between the engine and the hosting page.
//!
//! In the browser build the engine runs inside the site's page and talks to
//! its parent window through `postMessage`. Native builds compile the same
//! plumbing but never receive messages, and outgoing traffic is dropped.
//!
//! ## Message Flow
//!
//! ```text
//! Site shell (parent)  <──postMessage──>  Engine (canvas)
//!        │                                      │
//!        ├─ Request (with ID) ────────────────> │
//!        │                                      ├─ Process request
//!        │ <──────────────── Response (with ID) ┤
//!        │                                      │
//!        │ <───────── Notification (no ID) ─────┤
//! ```
//!
//! ## Requests
//!
//! - `navigate { path }`: switch route; unknown paths are `-32602`
//! - `get_route`: current route path
//! - `get_links`: navigation, footer and social links
//! - `get_fps`: smoothed frame rate
//!
//! Anything else is answered with `-32601 Method not found`. Messages without
//! an `id` are treated as notifications and get no response.
//!
//! ## Notifications
//!
//! - `route_changed { path }` on every route entry
//! - `scene_mounted` / `scene_skipped` after each mount attempt
//! - `headline_update { text, typing }` while the landing headline types
//! - `fps_update { fps, route }` twice a second
//! - `open_link { url }` when an external footer link is pressed
//! - `debug_message { message }` for every received payload
//!
//! ## Sending Notifications
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({ "data": "value" }));
//! }
//! ```

/// JSON-RPC 2.0 request handling, notifications and the WASM message listener.
pub mod web_rpc;

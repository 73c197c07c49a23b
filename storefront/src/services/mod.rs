//! # Services Module
//!
//! External service integrations for the storefront client.
//!
//! ```text
//! services/
//! └── api/   - Backend HTTP API client
//!              (users, catalog, cart, orders, wallet, addresses)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Storefront pages                      │
//! │                                                         │
//! │  SubmitGuard ──wraps──► page action ──calls──► api::*   │
//! │                                               │         │
//! │                                   ApiClient ◄─┘         │
//! │                                     │   └──► LoadingIndicator
//! └─────────────────────────────────────┼───────────────────┘
//!                                       │ HTTP/JSON
//!                                       ▼
//!                         ┌───────────────────────────┐
//!                         │  Storefront backend       │
//!                         │  /user/*  /category/*     │
//!                         │  /product/*  /cart/*      │
//!                         │  /order/*  /wallet/*      │
//!                         │  /users/{id}/addresses*   │
//!                         └───────────────────────────┘
//! ```

pub mod api;

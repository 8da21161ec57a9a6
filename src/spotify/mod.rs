//! # Spotify Integration Module
//!
//! This module is the integration layer between the application and the
//! Spotify Web API. It handles authentication and data retrieval and keeps
//! all HTTP communication in one place, so the layers above it only ever see
//! typed results and the crate's own error kinds.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (UI event handlers)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     └── Playlist Operations (track listing)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 client-credentials flow: the configured
//! client id and secret are exchanged for a short-lived access token via a
//! basic-authenticated form post. No user authorization is involved — the
//! application only reads public playlist data. The [`auth::TokenManager`]
//! keeps the token in memory and transparently requests a fresh one shortly
//! before expiry.
//!
//! ## API Coverage
//!
//! - `POST /api/token` — token exchange (`grant_type=client_credentials`)
//! - `GET /playlists/{id}/tracks` — playlist track listing, with `next`-link
//!   pagination followed to completion
//!
//! ## Error Handling
//!
//! A request is a single attempt: any network failure, error status, or
//! unexpected response shape maps into [`crate::error::Error::Api`] and is
//! surfaced to the user unchanged. There is no retry or partial-result
//! handling — callers either get the complete playlist or an error.

pub mod auth;
pub mod playlist;

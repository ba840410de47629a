//! Version resolution layer
//!
//! Determines the single version label shown in the documentation site's
//! navigation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Release   │────▶│  Resolver   │◀────│  Manifest   │
//! │  (remote)   │     │ (fallback)  │     │  (local)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Sources   │     │    Label    │
//! │  (GitHub)   │     │ (v<text>)   │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`label`]: `VersionLabel` and its normalization rules
//! - [`release`]: Release source trait for the remote step
//! - [`sources`]: Concrete release sources (GitHub Releases API)
//! - [`manifest`]: Manifest reader trait and version extraction for the local step
//! - [`resolver`]: Ordered fallback from remote to manifest to sentinel
//! - [`error`]: Reasons a resolution step is abandoned

pub mod error;
pub mod label;
pub mod manifest;
pub mod release;
pub mod resolver;
pub mod sources;

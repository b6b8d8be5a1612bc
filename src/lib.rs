//! # folio
//!
//! Client-side behavior for a static portfolio page, compiled to WebAssembly.
//!
//! The page markup and stylesheet are authored by hand; this crate only wires
//! the existing DOM to its effects: the typed hero text, theme persistence,
//! scroll-driven navbar state, the skill-bar reveal, the project filter, and
//! the contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Tunable timings, thresholds, and endpoints |
//! | [`error`] | Crate error type |
//! | [`store`] | Key-value preference store abstraction |
//! | [`theme`] | Dark/light theme state and persistence |
//! | [`typing`] | Typed-text state machine for the hero banner |
//! | [`scroll`] | Scroll-offset effects and active-section lookup |
//! | [`nav`] | Mobile menu state |
//! | [`skills`] | One-shot skill-bar reveal |
//! | [`filter`] | Project card filtering |
//! | [`contact`] | Email validation and pluggable message delivery |
//! | [`status`] | Transient form status message |
//! | `browser` | DOM bindings (`browser` feature only) |
//!
//! Everything outside `browser` is plain Rust and is tested natively.

pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod nav;
pub mod scroll;
pub mod skills;
pub mod status;
pub mod store;
pub mod theme;
pub mod typing;

#[cfg(feature = "browser")]
pub mod browser;

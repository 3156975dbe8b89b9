#![no_std]

//! A decoder for `multipart/form-data` message bodies.
//!
//! Cloison takes an HTTP body captured as text or as raw bytes, together
//! with its `Content-Type` header, and recovers the submitted form fields
//! as a mapping from field name to value. Binary payloads (such as uploaded
//! files) come back as untouched subranges of the input buffer.
//!
//! Most users should begin with the decoders in the [`avec`] module. The
//! [`sans`] module exposes the underlying scanning primitives for
//! applications needing finer control (such as those decoding into borrowed
//! storage, or running without the standard library).
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable the map-building decoders (default).

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod avec;
pub mod sans;

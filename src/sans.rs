//! Scanning primitives for implementing decoders.
//!
//! This module holds the pieces the [`crate::avec`] decoders are built
//! from, for applications that need to drive them directly. Everything
//! here operates on borrowed input and allocates nothing: segmentation is
//! communicated as byte offsets into the body, and recovered names and
//! boundaries are subslices of their sources.
//!
//! # Architecture
//!
//! Decoding a body is three independent concerns, one per submodule:
//!
//! - [`boundary`] resolves the delimiter token, from the declared content
//! type or by sniffing the body prefix.
//!
//! - [`segment`] splits the body at literal occurrences of the dashed
//! delimiter line, yielding the regions strictly between them.
//!
//! - [`disposition`] recovers a field name from a segment's header block.
//!
//! A decode loop composes these, threading the most recently recovered
//! field name across segments. See [`crate::avec::text`] for the reference
//! composition.

pub mod boundary;
pub mod disposition;
pub mod segment;

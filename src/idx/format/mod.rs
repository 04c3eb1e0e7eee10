//! File format parsing layer for IDX dataset files.
//!
//! This module provides the mid-level parsing layer that bridges between
//! the raw byte source and the high-level [`IdxReader`](crate::idx::reader::IdxReader).
//!
//! # Module Organization
//!
//! - [`header`]: Parses the fixed header (type, rank, dimensions, length)
//! - [`content`]: Reads and byte-order-normalizes the elements that follow
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐
//! │  Magic word     │ ← header::parse()
//! │  Length         │
//! │  Dimensions     │
//! ├─────────────────┤
//! │  Element 0      │ ← content::ElementCursor
//! │  Element 1      │
//! │  ...            │
//! └─────────────────┘
//! ```

pub mod content;
pub mod header;

//! Concrete entity schemas.
//!
//! Each schema lives in its own module and exposes its record type plus a
//! `schema()` accessor returning a process-wide, lazily built [`Schema`].
//!
//! [`Schema`]: crate::Schema

pub mod feature;

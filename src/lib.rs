//! Folio Application Library
//!
//! Application modules for the Folio catalog service.

pub mod modules;

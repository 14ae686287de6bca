//! Welcome server.
//!
//! Looks up where this server's own public address is, caches that one
//! result, and answers every request from it: "where is that, how far away
//! is it, and what should we say?" Nothing about the individual caller is
//! used, so all requests see the same location until the entry expires.

pub mod cache;
pub mod geo;
pub mod greeting;
pub mod web;
pub mod welcome;

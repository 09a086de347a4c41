//! Core library for hhtools
//!
//! This crate implements the pure half of the hhtools application. The
//! `hhtools` binary talks to the HeadHunter API and renders output; every
//! data transformation in between lives here as a pure function over plain
//! values.
//!
//! # Module Organization
//!
//! - [`vacancy`]: raw API payload types and the normalized [`vacancy::Card`]
//! - [`feed`]: pagination state for incremental loading, page accounting,
//!   and page/feed output assembly
//! - [`filters`]: translation of filter selections into API query pairs
//! - [`contact`]: contact message validation and the phone input mask
//!
//! All functions here are deterministic, perform no I/O, and are tested with
//! fixture data. Anything that needs a network call belongs in the binary
//! crate.

pub mod contact;
pub mod feed;
pub mod filters;
pub mod vacancy;

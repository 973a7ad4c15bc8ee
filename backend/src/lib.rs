//! # Forest Explorer
//!
//! Backend of a two-page dashboard over Indian environmental data.
//!
//! The forest cover page plots mean vegetation cover per spatial unit on a
//! map of India for one year at a time. The tourism page charts yearly
//! visitor counts for national parks, either one park at a time or all parks
//! overlaid for comparison.
//!
//! ## Architecture
//!
//! - [`io`]: CSV and workbook readers, the key join and the wide-to-long reshape
//! - [`store`]: configuration, errors and the read-only in-memory datasets
//! - [`models`]: record and widget selection types
//! - [`services`]: filters and the map/chart renderers
//! - [`routes`]: figure and chart payload types with their endpoint names
//! - [`api`]: flat re-exports of the public payload types
//! - [`http`]: axum server exposing the services as a REST API
//!
//! Datasets are loaded once at startup. Every request after that is a pure
//! filter and render over shared immutable data.

// StoreError carries structured context for logging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod io;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;

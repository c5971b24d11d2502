//! PlantPower Core - Domain logic library.
//!
//! This crate provides the in-memory domain logic shared by the PlantPower
//! components:
//! - `storefront` - Public-facing meal ordering site
//! - `integration-tests` - End-to-end tests against a running storefront
//!
//! # Architecture
//!
//! The core crate contains only data and pure collection logic - no I/O, no
//! HTTP, no async. Everything here is a synchronous transformation over the
//! fixed catalog and the session-held collections, which keeps it trivially
//! testable and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails
//! - [`catalog`] - The fixed meal catalog and its search operations
//! - [`cart`] - The cart aggregator (add / remove / subtotal)
//! - [`favorites`] - The user's favorite-meal set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Meal};
pub use favorites::Favorites;
pub use types::*;

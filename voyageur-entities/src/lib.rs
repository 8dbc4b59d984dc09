#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # voyageur-entities
//!
//! Reusable, agnostic domain entities for Le Voyageur.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod activity;
pub mod geo;
pub mod id;
pub mod location;
pub mod place;
pub mod rating;
pub mod tag;
pub mod time;
pub mod user;
pub mod user_list;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

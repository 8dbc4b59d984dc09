//! # voyageur-core
//!
//! Business rules of Le Voyageur: repository and gateway ports,
//! use cases and the search aggregator.

pub use voyageur_entities as entities;

pub mod authorization;
pub mod bbox;
pub mod db;
pub mod gateways;
pub mod guide;
pub mod repositories;
pub mod search;
pub mod tag;
pub mod usecases;

//! Adapters for the third-party services behind the gateway traits of
//! `voyageur-core`.

pub mod google_places;
pub mod michelin;

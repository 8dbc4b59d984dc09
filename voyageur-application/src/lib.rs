//! Flows that combine the location store with the external gateways.

mod discover_place_ids;
mod guide;
mod locations;
mod place_details;
mod search;
mod sync_guide_ratings;

pub mod prelude {
    pub use super::{
        discover_place_ids::*, guide::*, locations::*, place_details::*, search::*,
        sync_guide_ratings::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use voyageur_core::{
    db::*,
    entities::{self, *},
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use voyageur_db_sqlite::Connections;
}

pub use voyageur_core::{db, gateways, repositories, search};

pub mod entities {
    pub use voyageur_core::entities::*;
    #[cfg(test)]
    pub use voyageur_entities::builders::*;
}

pub mod usecases {
    pub use voyageur_core::usecases::*;
}

pub mod prelude {
    pub use super::{
        db::*,
        entities::{geo::*, id::*, location::*, place::*, rating::*, user::*, user_list::*},
        repositories::*,
    };
}

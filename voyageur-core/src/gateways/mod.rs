pub mod guide;
pub mod places;

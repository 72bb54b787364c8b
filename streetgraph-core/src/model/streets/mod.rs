//! Named street polylines and the store that holds them

pub mod components;
pub mod store;

pub use components::Street;
pub use store::StreetStore;

mod store;
mod use_cases;

pub use store::connect_store;
pub use use_cases::UseCases;

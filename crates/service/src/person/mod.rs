pub mod repository;
pub mod service;

pub use repository::{PersonRepository, SeaOrmPersonRepository};
pub use service::PersonService;

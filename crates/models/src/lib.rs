pub mod db;
pub mod person;

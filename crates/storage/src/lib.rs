pub mod local;
pub mod mock;
pub mod repository;

pub mod connection;
pub mod models;
pub mod pool_api_service;
pub mod repository;

pub mod domain;
pub mod ports;
pub mod repository_postgres;
pub mod routes;
pub mod sea_orm_entity;
pub mod services;

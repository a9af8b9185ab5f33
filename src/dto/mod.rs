//! DTO modules that bridge services with the HTTP surface.

pub mod customer;
pub mod main;

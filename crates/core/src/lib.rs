//! Domain types and validation for the character roster service.
//!
//! This crate is I/O-free: it defines the shared ID type, the domain error
//! enum, payload validation, and name normalization. Persistence lives in
//! `roster-db`, HTTP in `roster-api`.

pub mod error;
pub mod naming;
pub mod types;
pub mod validation;

//! persona - a strict, stateless person-record validation HTTP service
//!
//! Every endpoint validates its raw input against a declarative constraint
//! table and echoes the normalized result back; nothing is persisted.

pub mod cli;
pub mod http_server;
pub mod records;
pub mod schema;

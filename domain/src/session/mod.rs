//! Chat session primitives shared by prompts and backends.

pub mod entities;

//! Export functionality
//!
//! Provides the DDL exporter that turns a JSON document into a
//! CREATE TABLE statement.

pub mod sql;

pub use sql::DdlExporter;

//! Service layer providing the business operations on top of `models`.
//! - Runs every write inside one transaction, rolled back on any error.
//! - Enforces the city/event dependency rule before touching storage.
//! - Translates persistence failures into `ServiceError` kinds.

pub mod errors;
pub mod city;
pub mod event;
#[cfg(test)]
pub mod test_support;

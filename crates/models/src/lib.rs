//! Persistence layer: sea-orm entities for `city` and `event`, the
//! per-entity data-access functions the service layer composes, and
//! connection / sample-data helpers.

pub mod errors;
pub mod db;
pub mod city;
pub mod event;
pub mod seed;

#[cfg(test)]
mod tests;

pub mod domain;
pub mod service;

pub use domain::EventInput;
pub use service::EventService;

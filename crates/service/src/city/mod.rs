pub mod domain;
pub mod service;

pub use domain::CityInput;
pub use service::CityService;

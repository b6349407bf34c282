pub mod config;
pub mod error;
pub mod forms;
pub mod routes;
pub mod validation;

// Re-export commonly used items
pub use error::{SharedError, Result};
pub use config::{AppConfig, Deployment, Service, ServiceEndpoints};
pub use forms::{LoginForm, RegistrationForm};
pub use routes::RatingRoute;
pub use validation::ValidationPatterns;

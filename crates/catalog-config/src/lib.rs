pub mod capabilities;
pub mod config;
pub mod credentials;
pub mod paths;

pub use capabilities::Capabilities;
pub use config::{BookProviderConfig, Config, MovieProviderConfig};
pub use credentials::CredentialStore;
pub use paths::{base_path_override, PathManager};

//! External dependency implementations (ports + adapters).

pub mod error;
pub mod http;
pub mod persistence;
pub mod ports;
pub mod save_codec;
pub mod settings;

pub use error::EngineError;
pub use settings::AppConfig;

//! CatchDex engine library.
//!
//! The filtering, evolution-chain, and encounter-probability engine behind
//! the collection tracker.
//!
//! ## Structure
//!
//! - `use_cases/` - the pure computation pipeline plus collection
//!   orchestration
//! - `infrastructure/` - ports and adapters for snapshot storage, the
//!   catalogue fetch, the save-blob codec, and configuration
//! - `app` - application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;


pub use app::App;
pub use infrastructure::{AppConfig, EngineError};
pub use use_cases::{DexView, DisplayOptions, VariantGroup};

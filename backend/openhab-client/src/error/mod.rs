pub mod config;
pub mod dispatch;
pub mod operation;

pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use operation::OperationError;

pub mod command;
pub mod error;
pub mod node;
pub mod response;
pub mod usecases;

pub use self::command::Command;
pub use self::error::AppError;
pub use self::node::NodeEntry;
pub use self::response::Response;

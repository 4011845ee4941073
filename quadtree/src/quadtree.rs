mod api;
mod config;
mod node;
mod registry;
mod traversal;
mod types;

pub use api::QuadTreeBoxes;
pub use config::Config;
pub use registry::BoxRegistry;

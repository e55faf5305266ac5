//! Application layer: the render port, the render service, and the one
//! impure concern in the crate — the dev-mode flag read.

pub mod mode;
pub mod ports;
pub mod service;

pub use mode::ValidationMode;
pub use ports::ShellRenderer;
pub use service::ShellService;

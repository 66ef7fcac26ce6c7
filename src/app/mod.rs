//! Process-level helpers used by the binary.

pub mod shutdown;

// Re-export public API
pub use shutdown::cancel_on_ctrl_c;

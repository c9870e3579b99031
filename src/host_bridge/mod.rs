//! Bridge layer between the embedding host and the viewer
//!
//! The host owns a drawable surface and forwards raw pointer, wheel and
//! resize events; it never touches viewer state directly.

pub mod events;
pub mod shared_state;

// Re-export commonly used types
pub use events::{ListenerKind, ViewerEvent};
pub use shared_state::{host_channel, HostLink, ShutdownToken, ViewerHandle};

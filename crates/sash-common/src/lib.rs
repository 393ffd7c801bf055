pub mod errors;
pub mod events;
pub mod types;

pub use errors::{GeometryError, RoutingError, SashError, SettingsError};
pub use events::{Event, EventBus};
pub use types::{Rect, WindowId};

pub type Result<T> = std::result::Result<T, SashError>;

// Horizontal Calendar Library
// Rendering-agnostic core of a horizontally scrolling date strip

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{CalendarError, CalendarResult};
pub use models::date_window::{DateWindow, Position};
pub use models::event::{CalendarEvent, RequestId, ScrollCommand, SnapPreference};
pub use models::geometry::ItemGeometry;
pub use models::settings::CalendarSettings;
pub use models::week::WeekConvention;
pub use services::calendar::{DayCell, HorizontalCalendar, NavigationMode};
pub use services::scroll_sync::SyncState;

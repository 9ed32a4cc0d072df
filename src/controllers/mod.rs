//! Page-local view state derived from scroll, resize, pointer and timer
//! events. Nothing in here touches the DOM directly; the frontend hooks feed
//! these types and read their outputs back.

pub mod clock;
pub mod hover;
pub mod layout;
pub mod menu;
pub mod progress;
pub mod scroll;

pub use clock::ClockTicker;
pub use hover::{HoverFlag, HoverIcon, HoverPalette};
pub use layout::HeightSync;
pub use menu::{MenuGate, ScrollLock, ScrollSurface};
pub use progress::ProgressBand;
pub use scroll::ScrollDirectionTracker;

//! Session state on disk: the current windows, the stored window ordering,
//! and user settings.
//!
//! ## Snapshot file
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "created_at": "2024-03-18T09:30:00+00:00",
//!   "windows": [["https://a.example", "https://b.example"], ["https://c.example"]]
//! }
//! ```
//!
//! ## Settings file
//!
//! ```json
//! { "parentFolder": "Bookmarks bar/_" }
//! ```

pub mod settings;
pub mod snapshot;
pub mod windows;

pub use settings::{Settings, SettingsError, DEFAULT_PARENT_FOLDER};
pub use snapshot::{SnapshotError, SnapshotFile};
pub use windows::{load_windows_file, parse_windows, WindowsError};

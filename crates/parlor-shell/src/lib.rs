//! Desktop shell: the synchronous dispatcher over the virtual desktop
//!
//! Ties [`parlor_desktop`]'s managers to [`parlor_store`]'s persistence:
//! boot hydrates the managers from the store, and every public mutation
//! commits synchronously then writes a snapshot. Single-threaded by
//! design; the store's load-time repair re-derives consistency whatever
//! order the fire-and-forget writes land in.
//!
//! ## Example
//!
//! ```rust
//! use parlor_shell::DesktopShell;
//! use parlor_store::MemoryMedium;
//! use parlor_desktop::Size;
//!
//! let mut shell = DesktopShell::boot(MemoryMedium::new(), Size::new(1920.0, 1080.0));
//! let id = shell.open_window("calendar", "Calendar");
//! shell.maximize_window(id);
//! ```

mod hydrate;
mod shell;

pub use hydrate::{hydrate_icons, hydrate_windows, persisted_windows};
pub use shell::DesktopShell;

//! # Command-Line Interface
//!
//! The interactive menu and everything it prints.
//!
//! ## Menu
//!
//! | Key | Operation | What it does |
//! |-----|-----------|--------------|
//! | 1 | Create | Pick a crop, enter its dimensions, store a record |
//! | 2 | List | Show every record with its inputs and irrigation |
//! | 3 | Update | Re-enter a record's dimensions (blank keeps a value) |
//! | 4 | Delete | Remove a record after an `S/N` confirmation |
//! | 5 | Export | Write all records to the CSV export file |
//! | 0 | Exit | Leave the program |
//!
//! Records are picked by their identifier, and listings show identifiers,
//! so a number typed always means the same record even after deletions.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! farmtech --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the menu loop.

mod app;
mod console;
mod input;
mod menu;
mod output;
mod session;
mod view;

pub use app::{run, Cli};
pub use console::{Console, ConsoleError};
pub use input::InputError;
pub use menu::MenuOption;
pub use output::Output;
pub use session::Session;

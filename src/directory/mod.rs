//! Country directory state manager.
//!
//! [`DirectoryManager`] owns the session state: the ingested countries, the
//! favorites map, search/region/page inputs and the loading/error flags. Every
//! transition goes through [`DirectoryReducer`]; views are pure derivations
//! in [`view`].

mod intent;
mod manager;
mod reducer;
mod state;
pub mod view;

pub use intent::DirectoryIntent;
pub use manager::DirectoryManager;
pub use reducer::DirectoryReducer;
pub use state::DirectoryState;
pub use view::DirectoryView;

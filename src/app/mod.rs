pub mod navigation;
pub mod state;
pub mod update;

pub use navigation::handle_key;
pub use state::{
    AddAgentForm, AlertQueue, AppState, FormField, InputMode, Pools, Selection, StatusLevel,
    StatusLine,
};
pub use update::update;

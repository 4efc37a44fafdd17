pub mod components;
pub mod console;
pub mod interop;
pub mod resizable_window;

pub use components::*;
pub use console::*;
pub use interop::*;
pub use resizable_window::*;

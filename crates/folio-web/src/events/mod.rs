pub mod orientation;
pub mod pointer;
pub mod scroll;
pub mod touch;

pub use orientation::wire_orientation;
pub use pointer::wire_mouse;
pub use scroll::{wire_resize, wire_scroll};
pub use touch::wire_touch;

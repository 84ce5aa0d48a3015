mod scroll;
mod sections;
mod widgets;

pub use scroll::{measure, wire_slider_scroll};
pub use sections::wire_section_watcher;
pub use widgets::wire_widgets;

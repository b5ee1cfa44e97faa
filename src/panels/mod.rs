mod central_panel;
mod toolbar;

pub use central_panel::central_panel;
pub use toolbar::{toolbar, toolbar_panel, ToolbarResponse};

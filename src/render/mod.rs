//! Rendering: the sink interface, the recording sink and page previews.

mod json;
mod result;
mod sink;
mod text;

pub use json::{to_json, JsonFormat};
pub use result::{LayoutResult, LayoutStats};
pub use sink::{PageRecorder, RenderSink};
pub use text::to_text;

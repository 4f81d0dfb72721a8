//! Layout: measurement, wrapping, configuration and page composition.

mod compose;
mod config;
mod cursor;
mod measure;
mod wrap;

pub use compose::Composer;
pub use config::{HeaderStyle, HeadingStyle, LayoutConfig};
pub use cursor::{Cursor, FontContext};
pub use measure::{
    measure_checked, FixedWidthMeasurer, HeuristicMeasurer, TextMeasurer, TextStyle, PT_TO_MM,
};
pub use wrap::{wrap_spans, Wrapper};

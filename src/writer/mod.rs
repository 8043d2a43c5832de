//! PDF writing components for annotation appearances.
//!
//! ## Architecture
//!
//! ```text
//! appearance handler
//!     ↓
//! [ScopedStream] on a [StreamSink] (operations → content stream bytes)
//!     ↓
//! [FormXObject] + [Resources] (patterns, ExtGStates, nested forms)
//!     ↓
//! [AppearanceDictionary] (/AP on the annotation)
//!     ↓
//! [ObjectSerializer] (PDF syntax)
//! ```

pub mod appearance_stream;
pub mod content_stream;
pub mod graphics_state;
mod object_serializer;
pub mod pattern;
pub mod stream_sink;

pub use appearance_stream::{AppearanceDictionary, FormXObject, Resources};
pub use content_stream::{ContentStreamBuilder, ContentStreamOp, LineCap, LineJoin};
pub use graphics_state::ExtGStateBuilder;
pub use object_serializer::ObjectSerializer;
pub use pattern::{PatternPaintType, PatternTilingType, TilingPatternBuilder};
pub use stream_sink::{MemorySink, ScopedStream, StreamSink};

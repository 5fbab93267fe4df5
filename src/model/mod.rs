//! # Result Model
//!
//! Two parallel families of plain data types:
//!
//! - the engine side (`Value`, `Vertex`, `Edge`, `Path`, `DataSet`), decoded
//!   from query output, byte-oriented, every field present;
//! - the fixture side (`Expected`, `ExpectedVertex`, ...), authored in tests,
//!   text-oriented, with patterns and optional wildcard fields.
//!
//! This module is pure data. No I/O, no state.

pub mod value;
pub mod expected;
pub mod vertex;
pub mod edge;
pub mod path;
pub mod property_map;
pub mod dataset;

pub use value::{NullKind, Value};
pub use expected::Expected;
pub use vertex::{ExpectedTag, ExpectedVertex, Tag, Vertex};
pub use edge::{Direction, Edge, EdgeType, ExpectedEdge};
pub use path::{ExpectedPath, ExpectedStep, Path, Step};
pub use property_map::{ExpectedMap, PropertyMap};
pub use dataset::{DataSet, ExpectedDataSet, ExpectedRow, Row};

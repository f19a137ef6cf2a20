pub mod batch;
pub mod detection;
pub mod draw;
pub mod models;
pub mod rectify;

pub use batch::{BatchOptions, process_file, run};
pub use detection::quads::{find_quads, DEFAULT_AREA_THRESHOLD};
pub use models::{BoundingBox, Quad};
pub use rectify::matching::match_corners;
pub use rectify::warp::rectify;

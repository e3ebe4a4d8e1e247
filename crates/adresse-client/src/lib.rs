pub mod client;
pub mod error;
pub mod mapper;
pub mod mediator;
pub mod query;
pub mod render;
pub mod types;

pub use client::AdresseClient;
pub use error::AdresseError;
pub use mapper::map_results;
pub use mediator::{DisplayState, FetchOutcome, Mediator};
pub use query::{build_query, RequestDescriptor, RequestOptions, SearchEndpoint, SearchParams};
pub use render::{render_row, Row, RowStyle};
pub use types::{DisplayRecord, Feature, FeatureCollection, FeatureProperties, Geometry};

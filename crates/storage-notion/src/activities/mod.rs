mod model;
mod repository;

pub use model::{decode_page, encode_properties, PropertySchema, RICH_TEXT_FRAGMENT_LIMIT};
pub use repository::NotionActivityRepository;

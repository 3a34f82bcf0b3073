mod insertion_map;
pub mod logger;

pub use insertion_map::InsertionMap;

pub mod splay_map;

pub use splay_map::SplayMap;

pub mod renderer;
pub mod tiles;

pub use renderer::Renderer;
pub use tiles::{Tile, TileBoard};

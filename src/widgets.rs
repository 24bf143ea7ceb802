pub mod dot_grid;

pub use dot_grid::DotGrid;

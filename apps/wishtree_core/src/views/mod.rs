pub mod wishtree_health;
pub mod wishes;

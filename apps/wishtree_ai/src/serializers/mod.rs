pub mod wish_polish;

pub mod component;
pub mod controller;
mod dom;
#[cfg(test)]
mod testing;

pub use component::{HeroSlide, HeroSlider};

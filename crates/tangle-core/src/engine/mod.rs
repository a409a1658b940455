mod closure;
mod domain;

pub use domain::Tangle;

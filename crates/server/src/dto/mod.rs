mod route;
mod point;

pub use route::*;
pub use point::*;

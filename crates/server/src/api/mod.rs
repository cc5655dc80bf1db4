mod points;
mod routing;
mod search;

pub use points::*;
pub use routing::*;
pub use search::*;

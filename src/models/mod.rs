pub mod history;
pub mod price;
pub mod wire;

pub use history::*;
pub use price::*;
pub use wire::*;

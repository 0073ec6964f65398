// HTTP routes
pub mod groups;
pub mod health;
pub mod members;
pub mod payments;

pub use groups::*;
pub use health::*;
pub use members::*;
pub use payments::*;

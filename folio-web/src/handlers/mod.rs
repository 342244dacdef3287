pub mod admin;
pub mod feeds;
pub mod health;
pub mod posts;
pub mod preview;

pub use admin::*;
pub use feeds::*;
pub use health::*;
pub use posts::*;
pub use preview::*;

pub mod user;
pub mod commit;
pub mod stats;
pub mod project;
pub mod contact;

pub use user::*;
pub use commit::*;
pub use stats::*;
pub use project::*;
pub use contact::*;

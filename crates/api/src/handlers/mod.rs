pub mod health;
pub mod lookup;
pub mod resolvers;

pub use health::health_check;
pub use lookup::{lookup_preflight, perform_lookup};
pub use resolvers::list_resolvers;

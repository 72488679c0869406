pub mod lookup;
pub mod resolver;

pub use lookup::ErrorResponse;
pub use resolver::ResolverPresetDto;

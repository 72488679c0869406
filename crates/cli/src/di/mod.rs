pub mod lookup;

pub use lookup::LookupServices;

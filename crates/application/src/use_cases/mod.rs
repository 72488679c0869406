pub mod client;
pub mod lookup;

pub use client::SubmitLookupUseCase;
pub use lookup::PerformLookupUseCase;

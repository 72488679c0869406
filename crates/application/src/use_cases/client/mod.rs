mod submit_lookup;

pub use submit_lookup::{SubmitLookupUseCase, CANCELLED_MESSAGE};

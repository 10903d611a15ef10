pub mod record;
pub mod response;

pub use record::{CreatedRecord, Extra};
pub use response::ApiResponse;

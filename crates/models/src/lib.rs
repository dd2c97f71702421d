pub mod contact;
pub mod response;

pub use contact::{Contact, ContactInput};
pub use response::ApiResponse;

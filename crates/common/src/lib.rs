pub mod types;

pub use types::{GREETING, STATUS_MESSAGE, STATUS_SUCCESS, Status};

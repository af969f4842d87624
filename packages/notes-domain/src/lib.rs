pub mod note_id;
pub mod time_serde;
pub mod writegate;

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_INVALID_ID: &str = "ID must be a valid number";
pub const MSG_DELETED: &str = "Deleted successfully";
pub const MSG_STORE_FAILURE: &str = "Something went wrong";

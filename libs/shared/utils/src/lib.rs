pub mod codes;

pub use codes::{confirmation_code, new_id, CONFIRMATION_CODE_LEN};

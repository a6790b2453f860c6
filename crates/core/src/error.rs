pub use nslocate_api::error::{LocateError, LocateResult};

pub type Result<T> = LocateResult<T>;

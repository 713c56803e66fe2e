mod body;
mod headers;
mod param;
mod path;
mod query;

pub use self::body::CallBody;
pub use self::headers::CallHeaders;
pub use self::param::ParamValue;
pub use self::path::CallPath;
pub use self::query::ParamMap;

pub(crate) type Result<T> = core::result::Result<T, crate::Error>;

// Shorthand for return Err(TrackTagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(TrackTagError::new(ErrorKind::Variant))
// - err!(Variant(Value))   -> return Err(TrackTagError::new(ErrorKind::Variant(Value)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::TrackTagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::TrackTagError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use err;

/// Builds an [`ErrorKinds`](crate::ErrorKinds) set from a list of error types.
///
/// Usage:
/// ```rust
/// use context_utils::kinds;
/// use std::num::{ParseFloatError, ParseIntError};
///
/// let set = kinds![ParseIntError, ParseFloatError];
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! kinds {
    () => {
        $crate::kinds::ErrorKinds::new()
    };
    ($($kind:ty),+ $(,)?) => {
        $crate::kinds::ErrorKinds::new()$(.with::<$kind>())+
    };
}

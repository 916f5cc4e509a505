use std::{collections::HashSet, hash::Hash};

pub trait SliceUtil {
    /// Returns `true` if the slice only contains unique values
    fn is_unique<T>(&self) -> bool
    where
        Self: AsRef<[T]>,
        T: Eq + Hash,
    {
        let slice = self.as_ref();
        let mut seen = HashSet::with_capacity(slice.len());
        slice.iter().all(|item| seen.insert(item))
    }
}

impl<T> SliceUtil for [T] {}

#[macro_export]
macro_rules! assert_unique {
    ($slice:expr) => {{
        use $crate::slice::SliceUtil;
        let slice = &$slice;
        assert!(
            slice.is_unique(),
            "expected `{}` to be unique, but it wasn't; actual={:?}",
            stringify!($slice),
            slice,
        );
    }};
}

#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {{
        let value = &$e;
        assert!(
            value.is_empty(),
            "expected `{}` to be empty; actual={:?}",
            stringify!($e),
            value,
        );
    }};
}

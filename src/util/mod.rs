pub mod random;

// upper bound on what a deserializer's length hint may preallocate
const MAX_PREALLOCATED: usize = 4096;

/// Capacity to reserve for a collection whose input claims `hint` elements.
///
/// The hint comes from the input, so it is clamped; the collection still
/// grows past the cap when the elements actually arrive.
pub fn cautious_capacity(hint: Option<usize>) -> usize {
    hint.unwrap_or(0).min(MAX_PREALLOCATED)
}

#[macro_export]
macro_rules! some_or {
    ($e:expr, $err:expr) => {{
        match $e {
            Some(r) => r,
            None => $err,
        }
    }};
}

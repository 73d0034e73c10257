/// Builds a [`Value`](crate::Value) from literal-like syntax.
///
/// `null`, `[...]` and `{ "key": ... }` nest freely; any other expression is converted
/// with `Value::from`.
///
/// ```rust
/// use dynvalue::{value, Value};
///
/// let limit = 10;
/// let value = value!({
///     "name": "worker",
///     "limit": limit,
///     "ratio": -0.25,
///     "tags": ["a", null, [1, 2]],
///     "nested": {"empty": {}}
/// });
/// assert_eq!(value["limit"], Value::Int(10));
/// assert_eq!(value["tags"][1], Value::Null);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([ $($tt:tt)* ]) => {
        $crate::Value::Array($crate::value!(@array [] $($tt)*))
    };
    ({ $($tt:tt)* }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::Map::default();
        $crate::value!(@map map $($tt)*);
        $crate::Value::Map(map)
    }};

    // Elements of an array, accumulated as expressions.
    (@array [$($elems:expr,)*]) => {
        vec![$($elems,)*]
    };
    (@array [$($elems:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::Value::Null,] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::value!([$($inner)*]),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::value!({$($inner)*}),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::Value::from($next),] $($($rest)*)?)
    };

    // Entries of a map, inserted one at a time.
    (@map $map:ident) => {};
    (@map $map:ident $key:literal : null $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), $crate::Value::Null);
        $crate::value!(@map $map $($($rest)*)?);
    };
    (@map $map:ident $key:literal : [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), $crate::value!([$($inner)*]));
        $crate::value!(@map $map $($($rest)*)?);
    };
    (@map $map:ident $key:literal : {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), $crate::value!({$($inner)*}));
        $crate::value!(@map $map $($($rest)*)?);
    };
    (@map $map:ident $key:literal : $value:expr $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), $crate::Value::from($value));
        $crate::value!(@map $map $($($rest)*)?);
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

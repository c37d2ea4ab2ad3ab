/// Builds a [`Value`](crate::Value) tree from a JSON-like literal.
///
/// # Examples
///
/// ```rust
/// use yamlite::{yaml, Value};
///
/// let doc = yaml!({
///     "name": "Ada",
///     "active": true,
///     "tags": ["math", "engines"],
///     "extra": null
/// });
///
/// assert!(doc.is_mapping());
/// ```
#[macro_export]
macro_rules! yaml {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::yaml!($elem)),*])
    };

    // Handle empty mapping
    ({}) => {
        $crate::Value::Mapping($crate::Map::new())
    };

    // Handle non-empty mapping
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Map::new();
        $(
            mapping.insert($key.to_string(), $crate::yaml!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    // Fallback for any other expression (numbers, strings, variables)
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

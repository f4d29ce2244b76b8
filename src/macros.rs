/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// ```rust
/// use anyxml::{value, Value};
///
/// let doc = value!({
///     "host": "localhost",
///     "ports": [80, 443],
///     "tls": null
/// });
/// assert!(doc.is_mapping());
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Scalar($crate::Scalar::Null)
    };

    (true) => {
        $crate::Value::from(true)
    };

    (false) => {
        $crate::Value::from(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Mapping($crate::Mapping::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    // Any other expression goes through `Serialize`
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or_default()
    };
}

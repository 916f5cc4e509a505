/// Builds a [`Record`](crate::Record) from `key => value` pairs, preserving
/// the order in which the pairs are written.
///
/// ```
/// use cartograph_core::{record, Value};
///
/// let row = record! { "id" => 1, "name" => "Ayn Rand" };
/// assert_eq!(row["name"], Value::from("Ayn Rand"));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        record
    }};
}

use super::Value;

use indexmap::IndexMap;

/// An ordered mapping of field name to value.
///
/// Records carry model field data, gateway write data, search criteria and
/// raw rows returned by a gateway. Insertion order is preserved so that
/// generated statements list columns in the order the fields were declared.
pub type Record = IndexMap<String, Value>;

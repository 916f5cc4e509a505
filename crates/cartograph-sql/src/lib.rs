pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::{
    Column, Condition, Connective, Delete, Entry, Insert, Join, JoinKind, Operand, Predicate,
    Select, Statement, TableRef, Update,
};

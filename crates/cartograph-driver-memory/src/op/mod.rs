pub(crate) mod delete;
pub(crate) mod find;
pub(crate) mod insert;
pub(crate) mod update;

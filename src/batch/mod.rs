pub(crate) mod coordinator;
pub(crate) mod manifest;

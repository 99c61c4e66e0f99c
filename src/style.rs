pub(crate) mod inline;
pub(crate) mod naming;
pub(crate) mod target;

pub(crate) mod channel;
pub(crate) mod compile;
pub(crate) mod descriptor;
pub(crate) mod driver;
pub(crate) mod ease;

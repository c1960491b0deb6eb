pub(crate) mod common;
pub(crate) mod digit;
pub(crate) mod lsd;
pub(crate) mod msd;

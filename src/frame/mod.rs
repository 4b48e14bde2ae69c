//! One frame per request: background, transformed lettering and effect, with a result cache.

pub(crate) mod cache;
pub(crate) mod debounce;
pub(crate) mod fingerprint;
pub(crate) mod renderer;
pub(crate) mod request;

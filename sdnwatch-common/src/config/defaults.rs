use std::time::Duration;

pub(crate) const fn _default_true() -> bool {
    true
}

#[inline]
pub(crate) fn _default_sink_timeout() -> Duration {
    Duration::from_secs(10)
}

#[inline]
pub(crate) fn _default_metadata_timeout() -> Duration {
    Duration::from_secs(30)
}

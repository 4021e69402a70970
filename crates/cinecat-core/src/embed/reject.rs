use thiserror::Error;

/// Why a snippet was refused. Logged at the boundary only; callers get a
/// bare `Rejected` so every cause degrades to the same fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(super) enum RejectReason {
    #[error("snippet is not a single iframe element with a src")]
    Shape,
    #[error("iframe src is not an absolute URL")]
    Url,
    #[error("iframe host is not allowlisted")]
    Host,
}

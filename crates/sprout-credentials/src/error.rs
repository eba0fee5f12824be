use thiserror::Error;

/// Why a login attempt was refused. The `Display` renderings are the
/// user-facing failure reasons, surfaced verbatim by the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginDenied {
    #[error("account not found")]
    AccountNotFound,

    #[error("incorrect secret")]
    IncorrectSecret,

    #[error("account locked, about {hours_remaining} hours remaining")]
    AccountLocked { hours_remaining: i64 },
}

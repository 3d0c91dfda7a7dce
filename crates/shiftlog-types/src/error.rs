/// Failures parsing a value from one of the fixed enumerated domains.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown activity type '{0}'")]
    UnknownActivityType(String),
    #[error("standby reason is empty")]
    EmptyStandbyReason,
    #[error("unknown standby reason '{0}'")]
    UnknownStandbyReason(String),
}

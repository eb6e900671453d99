#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Any,
    Transient,
    Timeout,
    Disconnect,
    Busy,
    Permanent,
    InvalidInput,
    Unsupported,
}

impl FailureKind {
    pub fn parent(self) -> Option<FailureKind> {
        match self {
            FailureKind::Any => None,
            FailureKind::Transient | FailureKind::Permanent => Some(FailureKind::Any),
            FailureKind::Timeout | FailureKind::Disconnect | FailureKind::Busy => {
                Some(FailureKind::Transient)
            }
            FailureKind::InvalidInput | FailureKind::Unsupported => Some(FailureKind::Permanent),
        }
    }

    // A kind subsumes itself and every descendant.
    pub fn subsumes(self, other: FailureKind) -> bool {
        let mut cursor = Some(other);
        while let Some(kind) = cursor {
            if kind == self {
                return true;
            }
            cursor = kind.parent();
        }
        false
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Any => "any",
            FailureKind::Transient => "transient",
            FailureKind::Timeout => "timeout",
            FailureKind::Disconnect => "disconnect",
            FailureKind::Busy => "busy",
            FailureKind::Permanent => "permanent",
            FailureKind::InvalidInput => "invalid-input",
            FailureKind::Unsupported => "unsupported",
        }
    }
}

pub trait Classify {
    fn kind(&self) -> FailureKind;
}

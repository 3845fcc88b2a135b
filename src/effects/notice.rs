use crate::store::UserAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Toast-style message raised when a create, update or delete resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Notices follow the outcome: the delete toast only appears once the
    /// delete actually succeeded. Load errors have their own banner.
    pub fn for_action(action: &UserAction) -> Option<Self> {
        match action {
            UserAction::CreateSuccess(_) => Some(Self::success("user added successfully")),
            UserAction::UpdateSuccess { .. } => Some(Self::success("user updated successfully")),
            UserAction::DeleteSuccess(_) => Some(Self::success("user deleted successfully")),
            UserAction::CreateError(err) => {
                Some(Self::error(format!("add failed: {}", err.payload())))
            }
            UserAction::UpdateError(err) => {
                Some(Self::error(format!("update failed: {}", err.payload())))
            }
            UserAction::DeleteError(err) => {
                Some(Self::error(format!("delete failed: {}", err.payload())))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::model::UserId;

    #[test]
    fn delete_notice_only_on_success() {
        assert!(Notice::for_action(&UserAction::DeleteStart(UserId::from(1))).is_none());
        let ok = Notice::for_action(&UserAction::DeleteSuccess(UserId::from(1))).unwrap();
        assert_eq!(ok.level, NoticeLevel::Success);
        assert_eq!(ok.message, "user deleted successfully");

        let failed = Notice::for_action(&UserAction::DeleteError(ApiError::Transport(
            "refused".to_string(),
        )))
        .unwrap();
        assert_eq!(failed.level, NoticeLevel::Error);
        assert_eq!(failed.message, "delete failed: refused");
    }

    #[test]
    fn loads_raise_no_notice() {
        assert!(Notice::for_action(&UserAction::LoadStart).is_none());
        assert!(Notice::for_action(&UserAction::LoadSuccess(vec![])).is_none());
        assert!(Notice::for_action(&UserAction::LoadError(ApiError::Transport(
            "x".to_string()
        )))
        .is_none());
    }
}

use serde::{Deserialize, Serialize};

/// Unread notification counter returned by `/api/notifications/unread/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnreadNotifications {
    pub count: u32,
}

use serde::{Deserialize, Serialize};

/// Статус сессии генерации
///
/// `Analyzing` зарезервирован и никогда не выставляется переходами.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppStatus {
    #[default]
    Idle,
    Analyzing,
    Generating,
    Success,
    Error,
}

impl AppStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppStatus::Idle => "IDLE",
            AppStatus::Analyzing => "ANALYZING",
            AppStatus::Generating => "GENERATING",
            AppStatus::Success => "SUCCESS",
            AppStatus::Error => "ERROR",
        }
    }

    /// Запрос к модели в полёте
    pub fn is_busy(&self) -> bool {
        matches!(self, AppStatus::Generating)
    }
}

impl std::fmt::Display for AppStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

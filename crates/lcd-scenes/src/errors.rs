use lcd_core::AnimationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid color '{0}', expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error(transparent)]
    Animation(#[from] AnimationError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

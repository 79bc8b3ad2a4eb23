//! 全局错误类型定义

use std::io::Error as IoError;
use std::path::PathBuf;

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsindexerError {
    // 规则相关错误
    #[error("Invalid rule configuration: {0}")]
    InvalidConfiguration(String),

    // 文件相关错误
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    // 序列化/反序列化错误
    #[error("JSON error: {0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
}

impl RsindexerError {
    /// 快速构造配置错误
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        RsindexerError::InvalidConfiguration(msg.into())
    }
}

// 全局Result类型
pub type RsiResult<T> = Result<T, RsindexerError>;

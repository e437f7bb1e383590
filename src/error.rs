use std::io;
use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

/// 掃描與選取流程的錯誤類型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO 錯誤: {0}")]
    Io(#[from] io::Error),

    #[error("ZIP 壓縮檔錯誤: {0}")]
    Archive(#[from] ZipError),

    #[error("無效的根路徑: {path}")]
    InvalidRoot { path: PathBuf },

    #[error("無效的輸入: {reason}")]
    InvalidInput { reason: String },

    #[error("互動輸入失敗: {reason}")]
    Prompt { reason: String },

    #[error("壓縮檔 {archive} 中找不到項目 {name}")]
    EntryNotFound { archive: PathBuf, name: String },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt { reason: err.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

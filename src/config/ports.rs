use crate::error::Result;
use crate::models::options::SelectionOptions;

// 應用配置結構體，封裝掃描選項與呈現方式
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub options: SelectionOptions,
    pub review: bool,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}

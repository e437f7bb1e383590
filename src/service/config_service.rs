use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;
use crate::models::options::SelectionOptions;

// 配置服務，負責從選定的配置來源取得配置
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        let config = self.config_port.get_config()?;
        log::debug!("使用配置：{:?}", config);
        Ok(config)
    }
}

// 預設配置適配器：只指定根路徑，遞迴掃描且不過濾
pub struct DefaultConfigAdapter {
    root: String,
    is_archive_root: bool,
}

impl DefaultConfigAdapter {
    pub fn new(root: String, is_archive_root: bool) -> Self {
        DefaultConfigAdapter { root, is_archive_root }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        Ok(AppConfig {
            options: SelectionOptions::new(&self.root)
                .archive_root(self.is_archive_root)
                .include_subfolders(true),
            review: false,
            no_progress: false,
        })
    }
}

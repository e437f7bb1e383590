use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use crate::error::Result;

pub fn setup_logging(log_level: &str) -> Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // 重複初始化（例如測試中）時忽略
    let _ = env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init();
    Ok(())
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} 已選取: {pos} 檔案 {wide_msg}") {
                pb.set_style(style);
            }
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, count: u64, total_size: u64, current: &str) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let speed = if elapsed > 0.0 { count as f64 / elapsed } else { 0.0 };
        self.pb.set_message(format!(
            "{}，速度：{:.0} 檔案/秒，{}",
            format_file_size(total_size),
            speed,
            current
        ));
        self.pb.set_position(count);
    }

    pub fn finish(&self, file_count: u64, total_size: u64) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!(
            "完成，共 {} 個檔案，總大小：{}",
            file_count,
            format_file_size(total_size)
        ));
    }

    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

pub fn format_file_size(size: u64) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else if size < 1024 * 1024 * 1024 {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", size as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

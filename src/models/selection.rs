use crate::models::item::FileItem;

/// 一次選取流程的結果
#[derive(Debug, Clone)]
pub struct SelectionReport {
    pub items: Vec<FileItem>,
    pub total_size: u64,
    pub deselected: usize,
}

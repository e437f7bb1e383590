use crate::error::Result;
use crate::models::selection::SelectionReport;

// Facade 接口，負責協調掃描與選取流程
pub trait SelectionFacadeTrait {
    /// 依配置掃描來源並回傳最終選取的檔案
    /// # 回傳
    /// - 成功時返回選取結果，根路徑無效或掃描中斷時返回錯誤
    fn execute_selection(&mut self) -> Result<SelectionReport>;
}

use crate::error::Result;
use crate::service::collection::FileItemCollection;
use crate::service::traits::i_service::ReviewServiceTrait;

/// 不檢視，保留所有掃描結果
pub struct KeepAllReview;

impl ReviewServiceTrait for KeepAllReview {
    fn review(&self, _items: &FileItemCollection) -> Result<Vec<usize>> {
        Ok(Vec::new())
    }
}

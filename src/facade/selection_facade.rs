use log::{info, warn};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;
use crate::facade::traits::i_selection::SelectionFacadeTrait;
use crate::models::selection::SelectionReport;
use crate::service::collection::FileItemCollection;
use crate::service::config_service::ConfigService;
use crate::service::traits::i_service::ReviewServiceTrait;
use crate::utils::utils::ProgressManager;

pub struct SelectionFacade {
    config_service: ConfigService,
    review_service: Box<dyn ReviewServiceTrait>,
    collection: FileItemCollection,
}

impl SelectionFacade {
    pub fn new(
        config_port: Box<dyn ConfigPort>,
        review_service: Box<dyn ReviewServiceTrait>,
        collection: FileItemCollection,
    ) -> Self {
        SelectionFacade {
            config_service: ConfigService::new(config_port),
            review_service,
            collection,
        }
    }

    pub fn collection(&self) -> &FileItemCollection {
        &self.collection
    }
}

impl SelectionFacadeTrait for SelectionFacade {
    fn execute_selection(&mut self) -> Result<SelectionReport> {
        let config = self.config_service.get_config()?;
        self.collection.clear();

        let progress = ProgressManager::new(config.no_progress);
        if let Err(err) = self.scan(&config, &progress) {
            progress.abandon();
            return Err(err);
        }
        progress.finish(self.collection.len() as u64, self.collection.total_size());

        let deselected = if config.review && !self.collection.is_empty() {
            self.apply_review()?
        } else {
            0
        };

        info!(
            "選取 {} 個檔案，總大小 {} 位元組，取消選取 {} 個",
            self.collection.len(),
            self.collection.total_size(),
            deselected
        );

        Ok(SelectionReport {
            items: self.collection.iter().cloned().collect(),
            total_size: self.collection.total_size(),
            deselected,
        })
    }
}

impl SelectionFacade {
    fn scan(&mut self, config: &AppConfig, progress: &ProgressManager) -> Result<()> {
        let mut total_size = 0u64;
        for (index, item) in self.collection.add_range(&config.options)?.enumerate() {
            let item = item?;
            total_size += item.size();
            progress.update(index as u64 + 1, total_size, &item.to_string());
        }
        Ok(())
    }

    fn apply_review(&mut self) -> Result<usize> {
        let mut indices = self.review_service.review(&self.collection)?;
        indices.sort_unstable();
        indices.dedup();

        let mut removed = 0;
        // 由後往前移除，避免索引位移
        for index in indices.into_iter().rev() {
            if index >= self.collection.len() {
                warn!("忽略超出範圍的索引 {}", index);
                continue;
            }
            let item = self.collection.remove_at(index);
            info!("取消選取：{}", item);
            removed += 1;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use crate::error::Error;
    use crate::models::options::SelectionOptions;
    use crate::service::review::KeepAllReview;

    struct FixedConfig(AppConfig);

    impl ConfigPort for FixedConfig {
        fn get_config(&self) -> Result<AppConfig> {
            Ok(self.0.clone())
        }
    }

    struct DropIndices(Vec<usize>);

    impl ReviewServiceTrait for DropIndices {
        fn review(&self, _items: &FileItemCollection) -> Result<Vec<usize>> {
            Ok(self.0.clone())
        }
    }

    fn config(root: &std::path::Path, review: bool) -> AppConfig {
        AppConfig {
            options: SelectionOptions::new(root).extension_filters(".txt"),
            review,
            no_progress: true,
        }
    }

    fn sample_dir() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), b"1").unwrap();
        fs::write(temp.path().join("b.txt"), b"22").unwrap();
        fs::write(temp.path().join("c.txt"), b"333").unwrap();
        fs::write(temp.path().join("d.bin"), b"4444").unwrap();
        temp
    }

    #[test]
    fn reports_selected_items() {
        let temp = sample_dir();
        let mut facade = SelectionFacade::new(
            Box::new(FixedConfig(config(temp.path(), false))),
            Box::new(KeepAllReview),
            FileItemCollection::new(),
        );

        let report = facade.execute_selection().unwrap();
        let names: Vec<&str> = report.items.iter().map(|item| item.name()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
        assert_eq!(report.total_size, 6);
        assert_eq!(report.deselected, 0);
    }

    #[test]
    fn review_removes_deselected_items() {
        let temp = sample_dir();
        let mut facade = SelectionFacade::new(
            Box::new(FixedConfig(config(temp.path(), true))),
            Box::new(DropIndices(vec![2, 0, 2, 9])),
            FileItemCollection::new(),
        );

        let report = facade.execute_selection().unwrap();
        let names: Vec<&str> = report.items.iter().map(|item| item.name()).collect();
        assert_eq!(names, vec!["b.txt"]);
        assert_eq!(report.total_size, 2);
        assert_eq!(report.deselected, 2);
        assert_eq!(facade.collection().total_size(), 2);
    }

    #[test]
    fn rerunning_starts_from_an_empty_collection() {
        let temp = sample_dir();
        let mut facade = SelectionFacade::new(
            Box::new(FixedConfig(config(temp.path(), false))),
            Box::new(KeepAllReview),
            FileItemCollection::new(),
        );

        facade.execute_selection().unwrap();
        let report = facade.execute_selection().unwrap();
        assert_eq!(report.items.len(), 3);
        assert_eq!(report.total_size, 6);
    }

    #[test]
    fn invalid_root_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut facade = SelectionFacade::new(
            Box::new(FixedConfig(config(&temp.path().join("gone"), false))),
            Box::new(KeepAllReview),
            FileItemCollection::new(),
        );
        assert!(matches!(facade.execute_selection(), Err(Error::Io(_))));
    }
}

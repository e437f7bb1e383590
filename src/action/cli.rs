use clap::Parser;
use crate::action::interactive::{process_interactive_mode, DialoguerReview};
use crate::config::config::{validate_extension_filters, validate_root_path, Cli};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;
use crate::facade::selection_facade::SelectionFacade;
use crate::facade::traits::i_selection::SelectionFacadeTrait;
use crate::models::options::SelectionOptions;
use crate::models::selection::SelectionReport;
use crate::service::collection::FileItemCollection;
use crate::service::review::KeepAllReview;
use crate::service::traits::i_service::ReviewServiceTrait;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> Result<SelectionReport> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> Result<SelectionReport> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_port = CliConfigAdapter::new(cli.clone());
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config_port.get_config()?);
    }

    let review_service: Box<dyn ReviewServiceTrait> = if cli.review {
        Box::new(DialoguerReview)
    } else {
        Box::new(KeepAllReview)
    };
    let mut facade = SelectionFacade::new(
        Box::new(config_port),
        review_service,
        FileItemCollection::new(),
    );
    facade.execute_selection()
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        validate_root_path(&self.cli.root)?;
        validate_extension_filters(&self.cli.extensions)?;

        let options = SelectionOptions::new(&self.cli.root)
            .archive_root(self.cli.archive)
            .include_subfolders(self.cli.recursive)
            .extension_filters(&self.cli.extensions)
            .include_filters(!self.cli.exclude)
            .file_size_limit(self.cli.max_size)
            .file_count_limit(self.cli.max_count);

        Ok(AppConfig {
            options,
            review: self.cli.review,
            no_progress: self.cli.no_progress,
        })
    }
}

use std::process::ExitCode;

use backup_picker::action::cli::process_args;
use backup_picker::utils::utils::format_file_size;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(report) => {
            for item in &report.items {
                println!("{}\t{}", format_file_size(item.size()), item);
            }
            log::info!("程式執行完成，共選取 {} 個檔案", report.items.len());
            println!(
                "選取完成！共 {} 個檔案，總大小：{}",
                report.items.len(),
                format_file_size(report.total_size)
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("選取失敗：{}", err);
            eprintln!("錯誤：{}", err);
            ExitCode::FAILURE
        }
    }
}

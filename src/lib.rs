pub mod error;

pub mod models {
    pub mod item;
    pub mod options;
    pub mod selection;
}

pub mod service {
    pub mod collection;
    pub mod config_service;
    pub mod file;
    pub mod review;
    pub mod zip;

    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod selection_facade;

    pub mod traits {
        pub mod i_selection;
    }
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod utils;
}

pub use error::{Error, Result};
pub use models::item::{ArchiveFileItem, FileItem, PhysicalFileItem};
pub use models::options::SelectionOptions;
pub use service::collection::{AddRange, FileItemCollection, MAX_ITEM_SIZE};
pub use service::file::LocalFileSystem;
pub use service::traits::i_service::{DirListing, FileSystemPort};

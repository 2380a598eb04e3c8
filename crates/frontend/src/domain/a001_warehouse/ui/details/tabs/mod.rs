mod history;
mod info;
mod packages;

pub use history::HistoryTab;
pub use info::InfoTab;
pub use packages::PackagesTab;

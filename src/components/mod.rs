pub mod header;
pub mod repo_search;
pub mod repo_table;
pub mod search_form;

pub use header::Header;
pub use repo_search::{RepoSearchView, SearchResults};
pub use repo_table::RepoTable;
pub use search_form::SearchForm;

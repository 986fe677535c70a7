pub mod log_entry;
pub mod log_filter;
pub mod source_page_count;

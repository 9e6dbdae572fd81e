pub mod api_result;
pub mod query_string;

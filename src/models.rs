pub mod response_value;

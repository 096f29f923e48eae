pub mod user_adapter;

pub mod search_client;

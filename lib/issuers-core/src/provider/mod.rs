pub mod issuers_config;

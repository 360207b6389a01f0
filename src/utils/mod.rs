// Start of file: /src/utils/mod.rs

/*
    * Re-exports for the middleware helpers shared by the router:
    * global error mapping and access logging.
*/

pub mod error_handler;
pub mod request_logger;

// End of file: /src/utils/mod.rs

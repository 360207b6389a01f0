// HTTP API grouped by feature; each feature exposes a `routes` builder.

pub mod ping;

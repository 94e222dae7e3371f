//! The empty endpoint on port 3000.
//!
//! Run with:
//!   cargo run --example serve
//!
//! Try:
//!   curl -i -X OPTIONS http://localhost:3000/empty.php -H 'origin: http://example.com'
//!   curl -i http://localhost:3000/empty.php
//!   head -c 1048576 /dev/zero | curl -i -X POST --data-binary @- http://localhost:3000/empty.php

use preflight::{Preflight, Server};

#[tokio::main]
async fn main() -> Result<(), preflight::Error> {
    tracing_subscriber::fmt::init();

    Server::bind("0.0.0.0:3000")?
        .serve(Preflight::standard().into_handler())
        .await
}

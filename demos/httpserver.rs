//! A demo server exercising plain, error and chunked responses.
//!
//! Run with `RUST_LOG=info cargo run --example httpserver`.

use log::info;
use rawhttp::server::{DEFAULT_PORT, ResponseWriter};
use rawhttp::{default_headers, HandlerError, Headers, HttpServer, Request, ServerConfig, StatusCode};

const SUCCESS_PAGE: &str = "<html>
  <head>
    <title>200 OK</title>
  </head>
  <body>
    <h1>Success!</h1>
    <p>Your request was handled.</p>
  </body>
</html>";

async fn handler(w: &mut ResponseWriter, req: &Request) -> Result<(), HandlerError> {
    let target = req.target().unwrap_or("/");

    if target == "/yourproblem" {
        return Err(HandlerError::bad_request("requested a client error"));
    }
    if target == "/myproblem" {
        return Err(HandlerError::internal("requested a server error"));
    }
    if let Some(count) = target.strip_prefix("/chunked/") {
        let count = count
            .parse::<usize>()
            .map_err(|e| HandlerError::bad_request(format!("invalid chunk count: {e}")))?;
        return chunked(w, count).await;
    }

    let mut headers = default_headers(SUCCESS_PAGE.len());
    headers.overwrite("Content-Type", "text/html");

    w.write_status_line(StatusCode::OK).await?;
    w.write_headers(&headers).await?;
    w.write_body(SUCCESS_PAGE.as_bytes()).await?;
    Ok(())
}

/// Stream `count` numbered lines as separate chunks.
async fn chunked(w: &mut ResponseWriter, count: usize) -> Result<(), HandlerError> {
    let mut headers = default_headers(0);
    headers.delete("Content-Length");
    headers.overwrite("Transfer-Encoding", "chunked");
    headers.overwrite("Trailer", "X-Content-Length");

    w.write_status_line(StatusCode::OK).await?;
    w.write_headers(&headers).await?;

    let mut total = 0;
    for i in 0..count {
        let line = format!("chunk {i}\n");
        total += w.write_chunked_body(line.as_bytes()).await?;
    }
    w.write_chunked_body_done().await?;

    let mut trailers = Headers::new();
    trailers.set("X-Content-Length", &total.to_string());
    w.write_trailers(&trailers).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let server = HttpServer::serve(ServerConfig::with_port(DEFAULT_PORT), |w, req| {
        Box::pin(handler(w, req))
    })
    .await?;
    info!("Server started on port {port}", port = server.local_addr().port());

    tokio::signal::ctrl_c().await?;
    server.close();
    server.join().await;
    info!("Server gracefully stopped");

    Ok(())
}

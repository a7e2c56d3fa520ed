//! Accepts connections and logs every request it parses.
//!
//! Nothing is written back; each connection is read until the request is
//! complete or the peer closes it.

use log::{error, info};
use tokio::net::TcpListener;
use rawhttp::Request;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let listener = TcpListener::bind("127.0.0.1:42069").await?;
    info!("Listening on {addr}", addr = listener.local_addr()?);

    loop {
        let (mut socket, addr) = listener.accept().await?;
        info!("Connection from {addr}");

        tokio::spawn(async move {
            match Request::from_reader(&mut socket).await {
                Ok(request) => {
                    match &request.request_line {
                        Some(line) => {
                            info!("Request line:");
                            info!("- Method: {}", line.method);
                            info!("- Target: {}", line.request_target);
                            info!("- Version: {}", line.http_version);
                        }
                        None => info!("No request line received"),
                    }
                    info!("Headers:");
                    for (name, value) in &request.headers {
                        info!("- {name}: {value}");
                    }
                    info!("Body:");
                    info!("{}", String::from_utf8_lossy(&request.body));
                }
                Err(e) => error!("Error parsing request from {addr}: {e}"),
            }
            info!("Connection from {addr} closed");
        });
    }
}

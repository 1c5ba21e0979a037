//! WebSocket front end: the server accept loop and a one-shot client call.

use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{accept_async, connect_async};
use url::Url;
use uuid::Uuid;

use crate::error::{DecoderError, Result};
use crate::protocol::{Request, Response};
use crate::service::handle_text;

/// Accepts connections until the listener fails, one task per client.
pub async fn serve(listener: TcpListener) -> Result<()> {
    info!("Listening on: {}", listener.local_addr()?);

    loop {
        let (stream, peer) = listener.accept().await?;
        debug!("Accepted TCP connection from {}", peer);
        tokio::spawn(handle_connection(stream));
    }
}

async fn handle_connection(stream: TcpStream) {
    let client_id = Uuid::new_v4();

    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!("Error during the websocket handshake: {}", e);
            return;
        }
    };

    info!("New client connected: {}", client_id);

    let (mut sender, mut receiver) = ws_stream.split();

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                debug!("{}: {}", client_id, text);
                let response = handle_text(&text);

                let reply = match serde_json::to_string(&response) {
                    Ok(reply) => reply,
                    Err(e) => {
                        error!("Failed to encode response for {}: {}", client_id, e);
                        break;
                    }
                };

                if sender.send(Message::Text(reply)).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => (),
            Err(e) => {
                warn!("Error processing message from {}: {}", client_id, e);
                break;
            }
        }
    }

    info!("Client disconnected: {}", client_id);
}

/// Sends one request to the server at `url` and waits for its answer.
pub async fn request(url: &str, request: &Request) -> Result<Response> {
    let url = Url::parse(url)?;
    let (ws_stream, _) = connect_async(url.as_str()).await?;
    debug!("Connected to server: {}", url);

    let (mut sender, mut receiver) = ws_stream.split();
    sender
        .send(Message::Text(serde_json::to_string(request)?))
        .await?;

    let response = loop {
        match receiver.next().await {
            Some(Ok(Message::Text(text))) => break serde_json::from_str::<Response>(&text)?,
            Some(Ok(Message::Close(_))) | None => {
                return Err(DecoderError::UnexpectedReply(
                    "connection closed before a response".to_string(),
                ))
            }
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(e.into()),
        }
    };

    let _ = sender.send(Message::Close(None)).await;

    Ok(response)
}

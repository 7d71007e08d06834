//! Connection driver.
//!
//! Connects, frames the socket with [`LineCodec`] and pumps lines through
//! the [`Router`]. After every inbound line the session's outbox is written
//! and flushed and its transcript printed, so replies such as PONG leave
//! before the next line is read.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{info, warn};

use crate::config::BotConfig;
use crate::error::BotError;
use crate::line::LineCodec;
use crate::router::Router;

/// Connect to the configured server and run until the connection ends.
///
/// Always returns an error: either the transport failure or
/// [`BotError::ConnectionClosed`].
pub async fn run(config: &BotConfig) -> Result<(), BotError> {
    let mut router = Router::new(config);
    let codec = LineCodec::with_max_len(router.session().encoding(), config.max_line_len)?;

    let address = config.address();
    let stream = TcpStream::connect(&address).await?;
    info!(address = %address, encoding = codec.encoding_name(), "Connected");
    if let Err(e) = enable_keepalive(&stream) {
        warn!("failed to enable TCP keepalive: {}", e);
    }

    drive(stream, codec, &mut router).await
}

fn enable_keepalive(stream: &TcpStream) -> std::io::Result<()> {
    use socket2::{SockRef, TcpKeepalive};

    let sock = SockRef::from(stream);
    let keepalive = TcpKeepalive::new()
        .with_time(Duration::from_secs(120))
        .with_interval(Duration::from_secs(30));
    sock.set_tcp_keepalive(&keepalive)
}

/// Run the session over an already-connected stream.
///
/// Sends the registration handshake first, then handles inbound lines
/// until the stream ends or a framing error occurs.
pub async fn drive<S>(stream: S, codec: LineCodec, router: &mut Router) -> Result<(), BotError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut framed = Framed::new(stream, codec);

    router.session_mut().handshake();
    flush(&mut framed, router).await?;

    while let Some(line) = framed.next().await {
        let line = line?;
        router.handle_line(&line);
        flush(&mut framed, router).await?;
    }

    info!("Server closed the connection");
    Err(BotError::ConnectionClosed)
}

async fn flush<S>(framed: &mut Framed<S, LineCodec>, router: &mut Router) -> Result<(), BotError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let session = router.session_mut();
    let lines = session.take_outbox();
    for entry in session.take_transcript() {
        println!("{}", entry);
    }
    for line in lines {
        framed.send(line).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    fn config() -> BotConfig {
        BotConfig {
            nick: "WrexBot".to_string(),
            channels: vec!["#a".to_string(), "#b".to_string()],
            plugins: Vec::new(),
            ..BotConfig::default()
        }
    }

    async fn next_line<S>(framed: &mut Framed<S, LineCodec>) -> String
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        framed.next().await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn test_handshake_then_welcome_joins() {
        let config = config();
        let mut router = Router::new(&config);
        let (client, server) = tokio::io::duplex(4096);

        let server_side = async move {
            let mut server = Framed::new(server, LineCodec::new("utf-8").unwrap());
            assert_eq!(next_line(&mut server).await, "NICK WrexBot");
            assert_eq!(
                next_line(&mut server).await,
                "USER WrexBot WrexBot WrexBot :WrexBot"
            );

            server
                .send(":srv 001 WrexBot :Welcome".to_string())
                .await
                .unwrap();
            assert_eq!(next_line(&mut server).await, "JOIN #a");
            assert_eq!(next_line(&mut server).await, "JOIN #b");

            server.send("PING :srv".to_string()).await.unwrap();
            assert_eq!(next_line(&mut server).await, "PONG :srv");
        };

        let codec = LineCodec::new("utf-8").unwrap();
        let (result, ()) = tokio::join!(drive(client, codec, &mut router), server_side);
        assert!(matches!(result, Err(BotError::ConnectionClosed)));
    }

    #[tokio::test]
    async fn test_partial_line_at_close_is_clean_shutdown() {
        let config = config();
        let mut router = Router::new(&config);
        let (client, server) = tokio::io::duplex(4096);

        let server_side = async move {
            use tokio::io::AsyncWriteExt;
            let mut server = server;
            server
                .write_all(b":srv NOTICE * :hi\r\n:srv NOTICE * :cut sh")
                .await
                .unwrap();
        };

        let codec = LineCodec::new("utf-8").unwrap();
        let (result, ()) = tokio::join!(drive(client, codec, &mut router), server_side);
        assert!(matches!(result, Err(BotError::ConnectionClosed)));
    }

    #[tokio::test]
    async fn test_overlong_line_is_fatal() {
        let config = config();
        let mut router = Router::new(&config);
        let (client, server) = tokio::io::duplex(4096);

        let server_side = async move {
            use tokio::io::AsyncWriteExt;
            let mut server = server;
            server.write_all(&[b'a'; 256]).await.unwrap();
            server
        };

        let codec = LineCodec::with_max_len("utf-8", 64).unwrap();
        let (result, _server) = tokio::join!(drive(client, codec, &mut router), server_side);
        assert!(matches!(
            result,
            Err(BotError::Protocol(ProtocolError::MessageTooLong { .. }))
        ));
    }
}

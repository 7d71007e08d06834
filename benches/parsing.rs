//! Benchmarks for line parsing, framing and routing.

use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio_util::codec::Decoder;
use wrexbot::{BotConfig, LineCodec, Message, Router};

/// Simple PING message
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Message with prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Custom command
const CUSTOM_COMMAND: &str = ":Shepard!s@normandy PRIVMSG #normandy :!say #citadel I should go";

/// Numeric response
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Parsing");

    for (name, line) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("with_prefix", PREFIX_MESSAGE),
        ("custom_command", CUSTOM_COMMAND),
        ("numeric_response", NUMERIC_RESPONSE),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let msg = Message::parse(black_box(line)).unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

fn benchmark_framing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Line Framing");

    for count in [1usize, 10, 100] {
        let mut input = Vec::new();
        for _ in 0..count {
            input.extend_from_slice(PREFIX_MESSAGE.as_bytes());
            input.extend_from_slice(b"\r\n");
        }

        group.bench_with_input(BenchmarkId::new("decode", count), &input, |b, input| {
            b.iter(|| {
                let mut codec = LineCodec::new("utf-8").unwrap();
                let mut buf = BytesMut::from(&input[..]);
                let mut lines = 0;
                while let Some(line) = codec.decode(&mut buf).unwrap() {
                    black_box(line);
                    lines += 1;
                }
                lines
            })
        });
    }

    group.finish();
}

fn benchmark_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Routing");
    let config = BotConfig {
        nick: "WrexBot".to_string(),
        admins: vec!["Shepard".to_string()],
        plugins: vec!["Admin".to_string(), "Shepard".to_string(), "Example".to_string()],
        ..BotConfig::default()
    };
    let mut router = Router::new(&config);

    for (name, line) in [
        ("ping", SIMPLE_MESSAGE),
        ("privmsg", PREFIX_MESSAGE),
        ("admin_say", CUSTOM_COMMAND),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                router.handle_line(black_box(line));
                let session = router.session_mut();
                black_box(session.take_outbox());
                black_box(session.take_transcript());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parsing, benchmark_framing, benchmark_routing);
criterion_main!(benches);

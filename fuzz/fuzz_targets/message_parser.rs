//! Fuzz target for IRC line parsing and routing.
//!
//! Feeds arbitrary text to the parser and the router; neither may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;
use wrexbot::{BotConfig, LineCodec, Message, Router};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.is_empty() || input.len() > 512 {
            return;
        }

        let _ = Message::parse(input);
        let _ = LineCodec::sanitize(input.to_string());

        let config = BotConfig {
            admins: vec!["fuzz".to_string()],
            plugins: vec!["Admin".to_string(), "Shepard".to_string(), "Example".to_string()],
            ..BotConfig::default()
        };
        let mut router = Router::new(&config);
        router.handle_line(input);
    }
});

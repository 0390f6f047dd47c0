//! One-shot HTTP responder for exercising the StormGlass provider offline.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Canned server answering a single request.
pub struct OneShotServer {
    /// Base URL to point the provider at, e.g. `http://127.0.0.1:40123/v2`.
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Serve `body` with `status` to the first connection.
    pub fn respond(status: u16, reason: &str, body: &str) -> Self {
        Self::respond_raw(format!(
            "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        ))
    }

    /// Write `response` verbatim to the first connection, then close it.
    pub fn respond_raw(response: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let port = listener.local_addr().expect("listener address").port();
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut head = String::new();
            loop {
                let mut line = String::new();
                let read = reader.read_line(&mut line).expect("read request line");
                if read == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            let mut writer = stream;
            writer
                .write_all(response.as_bytes())
                .expect("write response");
            writer.flush().expect("flush response");
            head
        });
        Self {
            base_url: format!("http://127.0.0.1:{port}/v2"),
            handle,
        }
    }

    /// Wait for the request to be served and return its head.
    pub fn request_head(self) -> String {
        self.handle.join().expect("server thread panicked")
    }
}

/// The three-hour StormGlass fixture.
pub fn three_hour_fixture() -> &'static str {
    include_str!("fixtures/stormglass_weather_3_hours.json")
}
